//! Pure functions for mapping Dropbox paths onto Slack channels.
//!
//! Layout convention: `<target_dir>/<channel>/<any/nested/file>`.

/// Returns the Slack channel a changed file belongs to.
///
/// Dropbox paths are case-insensitive, so the target prefix is matched
/// ignoring ASCII case. The channel is returned as written in `path`.
/// Files directly inside the target, and paths outside it, have no channel.
pub fn channel_for_path(target_dir: &str, path: &str) -> Option<String> {
    let target = target_dir.trim_end_matches('/');

    if path.len() <= target.len() || !path.is_char_boundary(target.len()) {
        return None;
    }

    let (prefix, rest) = path.split_at(target.len());
    if !prefix.eq_ignore_ascii_case(target) {
        return None;
    }

    let rest = rest.strip_prefix('/')?;
    let (channel, remainder) = rest.split_once('/')?;

    if channel.is_empty() || remainder.is_empty() {
        return None;
    }

    Some(channel.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_segment_below_target_is_channel() {
        assert_eq!(
            channel_for_path("/target", "/target/channel1/file"),
            Some("channel1".to_string())
        );
    }

    #[test]
    fn test_nested_files_use_top_level_directory() {
        assert_eq!(
            channel_for_path("/target", "/target/general/2024/notes/a.txt"),
            Some("general".to_string())
        );
    }

    #[test]
    fn test_target_matching_ignores_case_and_trailing_slash() {
        assert_eq!(
            channel_for_path("/Shared/Team/", "/shared/team/Design/brief.pdf"),
            Some("Design".to_string())
        );
    }

    #[test]
    fn test_file_directly_in_target_has_no_channel() {
        assert_eq!(channel_for_path("/target", "/target/readme.txt"), None);
    }

    #[test]
    fn test_path_outside_target_has_no_channel() {
        assert_eq!(channel_for_path("/target", "/other/channel1/file"), None);
        assert_eq!(channel_for_path("/target", "/targets/channel1/file"), None);
    }

    #[test]
    fn test_target_itself_has_no_channel() {
        assert_eq!(channel_for_path("/target", "/target"), None);
        assert_eq!(channel_for_path("/target", "/target/"), None);
    }

    #[test]
    fn test_empty_segments_are_rejected() {
        assert_eq!(channel_for_path("/target", "/target//file"), None);
        assert_eq!(channel_for_path("/target", "/target/channel1/"), None);
    }

    #[test]
    fn test_root_target() {
        assert_eq!(
            channel_for_path("/", "/random/a.png"),
            Some("random".to_string())
        );
        assert_eq!(channel_for_path("", "/random/a.png"), Some("random".to_string()));
    }
}
