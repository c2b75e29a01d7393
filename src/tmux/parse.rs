// ABOUTME: Parsers for tmux list-sessions and list-windows output

use tracing::warn;

use crate::models::SessionInfo;

/// Field separator used in the list-sessions format string
pub const FIELD_DELIMITER: char = '~';

/// Format passed to `tmux list-sessions -F`
pub const SESSION_FORMAT: &str = "#{session_id}~#{session_name}~#{session_attached}";

/// Format passed to `tmux list-windows -F`
pub const WINDOW_FORMAT: &str = "#{window_name}";

/// Parse `id~name~attached` lines.
///
/// Names may contain the delimiter, so everything between the first and last
/// field is the name. Malformed lines are logged and skipped.
pub fn parse_sessions(output: &str) -> Vec<SessionInfo> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let session = parse_session_line(line);
            if session.is_none() {
                warn!("Skipping malformed tmux session line: {:?}", line);
            }
            session
        })
        .collect()
}

fn parse_session_line(line: &str) -> Option<SessionInfo> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() < 3 {
        return None;
    }

    let index = parts[0].trim().trim_start_matches('$').parse::<u32>().ok()?;
    let name = parts[1..parts.len() - 1].join(&FIELD_DELIMITER.to_string());
    let attached = parts[parts.len() - 1].trim() == "1";

    Some(SessionInfo::new(index, name, attached))
}

/// One window name per line, in display order
pub fn parse_windows(output: &str) -> Vec<String> {
    output.lines().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_sessions() {
        let sessions = parse_sessions("$0~work~1\n$2~dev~0\n");

        assert_eq!(
            sessions,
            vec![
                SessionInfo::new(0, "work", true),
                SessionInfo::new(2, "dev", false),
            ]
        );
    }

    #[test]
    fn test_only_one_means_attached() {
        let sessions = parse_sessions("$1~a~1\n$2~b~0\n$3~c~yes\n");
        let attached: Vec<bool> = sessions.iter().map(|s| s.attached).collect();

        assert_eq!(attached, vec![true, false, false]);
    }

    #[test]
    fn test_name_containing_delimiter() {
        let sessions = parse_sessions("$4~home~dir~0");

        assert_eq!(sessions, vec![SessionInfo::new(4, "home~dir", false)]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let sessions = parse_sessions("garbage\n$1~ok~0\n$x~bad-id~1\n\n");

        assert_eq!(sessions, vec![SessionInfo::new(1, "ok", false)]);
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_sessions("").is_empty());
        assert!(parse_windows("").is_empty());
    }

    #[test]
    fn test_parse_windows() {
        assert_eq!(parse_windows("vim\nshell\nlogs\n"), vec!["vim", "shell", "logs"]);
    }
}
