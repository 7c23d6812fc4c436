#[cfg(test)]
mod tests {
    use family_roster::*;

    /// Create the roster the binary reports on
    fn create_test_family() -> FamilyRoster {
        let mut family = FamilyRoster::new();
        family.add(FamilyMember::mother("Alice", 45));
        family.add(FamilyMember::father("Bob", 48));
        family.add(FamilyMember::daughter("Charlotte", 15));
        family.add(FamilyMember::son("David", 12));
        family
    }

    #[test]
    fn test_render_all_end_to_end() {
        let family = create_test_family();
        let lines: Vec<String> = family.render_all().collect();

        assert_eq!(
            lines,
            vec![
                "Type: Mother, Name: Alice, Age: 45",
                "Type: Father, Name: Bob, Age: 48",
                "Type: Daughter, Name: Charlotte, Age: 15",
                "Type: Son, Name: David, Age: 12",
            ]
        );
    }

    #[test]
    fn test_average_age_end_to_end() {
        let family = create_test_family();
        let average = family.average_age().unwrap();

        assert!((average - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let family = create_test_family();

        let first: Vec<String> = family.render_all().collect();
        let second: Vec<String> = family.render_all().collect();
        assert_eq!(first, second);
        assert_eq!(family.average_age(), family.average_age());
    }

    #[test]
    fn test_average_matches_sum_over_count() {
        let ages = [3, 17, 29, 41, 58, 0, 66];
        let roster: FamilyRoster = ages
            .iter()
            .enumerate()
            .map(|(i, &age)| FamilyMember::new(Role::ALL[i % 4], format!("M{i}"), age))
            .collect();

        let expected = f64::from(ages.iter().sum::<i32>()) / ages.len() as f64;
        assert_eq!(roster.len(), ages.len());
        assert_eq!(roster.render_all().count(), ages.len());
        assert!((roster.average_age().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_roster_is_named_error() {
        let roster = FamilyRoster::default();
        let err = roster.average_age().unwrap_err();

        assert_eq!(err, RosterError::EmptyRoster);
        assert_eq!(
            err.to_string(),
            "Cannot compute average age of an empty roster"
        );
    }

    #[test]
    fn test_full_report() {
        let family = create_test_family();
        let lines = render_report(&family, &ReportConfig::default()).unwrap();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Family Members:");
        assert_eq!(lines[5], "Average Age: 30");
    }

    #[test]
    fn test_extend_appends_after_existing() {
        let mut family = create_test_family();
        family.extend(vec![FamilyMember::daughter("Freja", 6)]);

        let last = family.members().last().unwrap();
        assert_eq!(last.name(), "Freja");
        assert_eq!((&family).into_iter().count(), 5);
    }
}
