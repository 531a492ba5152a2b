use std::collections::HashSet;

use crate::models::Athlete;

/// Athletes that are not yet enrolled in the division.
pub fn available_athletes<'a>(all: &'a [Athlete], enrolled: &[Athlete]) -> Vec<&'a Athlete> {
    let enrolled: HashSet<i64> = enrolled.iter().map(|athlete| athlete.id).collect();
    all.iter()
        .filter(|athlete| !enrolled.contains(&athlete.id))
        .collect()
}

/// Case-insensitive substring search on name, team and email. A blank term matches everyone.
pub fn search_athletes<'a, I>(athletes: I, term: &str) -> Vec<&'a Athlete>
where
    I: IntoIterator<Item = &'a Athlete>,
{
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return athletes.into_iter().collect();
    }

    let contains = |field: Option<&str>| field.is_some_and(|value| value.to_lowercase().contains(&term));

    athletes
        .into_iter()
        .filter(|athlete| {
            contains(Some(athlete.name.as_str()))
                || contains(athlete.team.as_deref())
                || contains(athlete.email.as_deref())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{BeltRank, Gender};

    fn athlete(id: i64, name: &str, team: Option<&str>, email: Option<&str>) -> Athlete {
        Athlete {
            id,
            name: name.to_string(),
            date_of_birth: None,
            gender: Gender::Male,
            belt_rank: BeltRank::Blue,
            weight: Decimal::new(75, 0),
            team: team.map(str::to_string),
            coach_name: None,
            email: email.map(str::to_string),
            phone: None,
            experience_notes: None,
        }
    }

    fn athletes() -> Vec<Athlete> {
        vec![
            athlete(1, "John Silva", Some("Gracie Barra"), None),
            athlete(2, "Maria Santos", Some("Alliance"), Some("maria@example.com")),
            athlete(3, "Pedro Costa", None, Some("pedro@checkmat.com")),
        ]
    }

    fn ids(found: Vec<&Athlete>) -> Vec<i64> {
        found.iter().map(|athlete| athlete.id).collect()
    }

    #[test]
    fn test_available_excludes_enrolled() {
        let all = athletes();
        let enrolled = vec![all[1].clone()];
        assert_eq!(ids(available_athletes(&all, &enrolled)), vec![1, 3]);
        assert_eq!(ids(available_athletes(&all, &[])), vec![1, 2, 3]);
    }

    #[test]
    fn test_blank_search_returns_everyone() {
        let all = athletes();
        assert_eq!(search_athletes(&all, "").len(), 3);
        assert_eq!(search_athletes(&all, "   ").len(), 3);
    }

    #[test]
    fn test_search_fields() {
        let all = athletes();
        assert_eq!(ids(search_athletes(&all, "silva")), vec![1]);
        assert_eq!(ids(search_athletes(&all, "ALLIANCE")), vec![2]);
        assert_eq!(ids(search_athletes(&all, "checkmat")), vec![3]);
        assert_eq!(ids(search_athletes(&all, "a")), vec![1, 2, 3]);
        assert!(search_athletes(&all, "nobody").is_empty());
    }

    #[test]
    fn test_search_within_available() {
        let all = athletes();
        let enrolled = vec![all[0].clone()];
        let available = available_athletes(&all, &enrolled);
        assert_eq!(ids(search_athletes(available, "s")), vec![2, 3]);
    }
}
