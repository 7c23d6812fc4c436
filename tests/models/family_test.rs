#[cfg(test)]
mod tests {
    use family_roster::models::family::*;
    use family_roster::models::types::Role;

    #[test]
    fn test_role_fixed_by_constructor() {
        let members = [
            FamilyMember::mother("Alice", 45),
            FamilyMember::father("Bob", 48),
            FamilyMember::daughter("Charlotte", 15),
            FamilyMember::son("David", 12),
        ];

        let roles: Vec<Role> = members.iter().map(FamilyMember::role).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn test_describe_reports_role_regardless_of_inputs() {
        // Same name and age under every role
        for role in Role::ALL {
            let member = FamilyMember::new(role, "Sam", 30);
            assert_eq!(
                member.describe(),
                format!("Type: {}, Name: Sam, Age: 30", role.as_str())
            );
        }
    }

    #[test]
    fn test_serde_shape() {
        let member = FamilyMember::daughter("Charlotte", 15);
        let json = serde_json::to_value(&member).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"role": "Daughter", "name": "Charlotte", "age": 15})
        );
    }

    #[test]
    fn test_serde_from_json() {
        let member: FamilyMember =
            serde_json::from_str(r#"{"role": "Father", "name": "Bob", "age": 48}"#).unwrap();

        assert_eq!(member, FamilyMember::father("Bob", 48));
        assert!(
            serde_json::from_str::<FamilyMember>(r#"{"role": "Uncle", "name": "X", "age": 1}"#)
                .is_err()
        );
    }
}
