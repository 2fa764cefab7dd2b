// Text formatters for displaying player names on dashboards

/// Names longer than this render as first initial + surname.
const SMART_NAME_MAX_LEN: usize = 16;

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// "John Smith" -> "J Smith"; single-word names are just title-cased and
/// middle names are dropped in favour of the last word.
pub fn first_initial_surname(player_name: &str) -> String {
    let parts: Vec<&str> = player_name.split_whitespace().collect();
    match parts.as_slice() {
        [] => String::new(),
        [only] => title_case(only),
        parts => {
            let initial: String = parts[0]
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default();
            format!("{} {}", initial, title_case(parts[parts.len() - 1]))
        }
    }
}

/// Full name, title-cased.
pub fn full_name(player_name: &str) -> String {
    title_case(player_name)
}

/// Shorten only when the full name would not fit on a card.
pub fn smart_name(player_name: &str) -> String {
    if player_name.trim().chars().count() > SMART_NAME_MAX_LEN {
        first_initial_surname(player_name)
    } else {
        full_name(player_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_initial_surname() {
        assert_eq!(first_initial_surname("John Smith"), "J Smith");
        assert_eq!(first_initial_surname("jonn smith"), "J Smith");
        assert_eq!(first_initial_surname("john"), "John");
        assert_eq!(first_initial_surname("John"), "John");
        assert_eq!(first_initial_surname("John Smith Jones"), "J Jones");
        assert_eq!(first_initial_surname(""), "");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(full_name("kevin de bruyne"), "Kevin De Bruyne");
        assert_eq!(full_name("SAKA"), "Saka");
    }

    #[test]
    fn test_smart_name() {
        assert_eq!(smart_name("John Smith"), "John Smith");
        assert_eq!(smart_name("Roberto Firmino Barbosa"), "R Barbosa");
    }
}
