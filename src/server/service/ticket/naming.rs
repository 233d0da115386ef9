use chrono::{DateTime, Utc};

/// Longest requester name kept in a ticket id; Discord caps channel names at 100.
const MAX_NAME_LEN: usize = 32;

/// Derives the public ticket id, which doubles as the channel name.
///
/// The result is `ticket-<name>-<unix millis>` lowercased and restricted to
/// `[a-z0-9-]`. A name with no usable characters is replaced by the requester id.
pub fn ticket_id(username: &str, user_id: u64, now: DateTime<Utc>) -> String {
    let mut name: String = username
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .take(MAX_NAME_LEN)
        .collect();

    if name.trim_matches('-').is_empty() {
        name = user_id.to_string();
    }

    format!("ticket-{}-{}", name, now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn lowercases_and_strips_disallowed_characters() {
        let id = ticket_id("Alice.Smith_99!", 1, at_millis(1_767_268_800_000));

        assert_eq!(id, "ticket-alicesmith99-1767268800000");
    }

    #[test]
    fn keeps_hyphens() {
        assert_eq!(ticket_id("jean-luc", 1, at_millis(5)), "ticket-jean-luc-5");
    }

    #[test]
    fn falls_back_to_user_id_when_name_is_empty() {
        assert_eq!(ticket_id("ÆØÅ 🎮", 4242, at_millis(5)), "ticket-4242-5");
    }

    #[test]
    fn output_is_restricted_to_allowed_characters() {
        let id = ticket_id("Ünïcödé ユーザー Name", 1, at_millis(5));

        assert!(id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn truncates_long_names() {
        let id = ticket_id(&"a".repeat(80), 1, at_millis(5));

        assert_eq!(id, format!("ticket-{}-5", "a".repeat(32)));
    }
}
