use super::*;

#[test]
fn part_types_round_trip_through_display_name() {
    for &part_type in PartType::all() {
        let parsed: PartType = part_type.display_name().parse().unwrap();
        assert_eq!(parsed, part_type, "round-trip failed for {:?}", part_type);
    }
}

#[test]
fn part_type_aliases_resolve() {
    let cases = [
        ("fb", PartType::FaceBolt),
        ("FACE BOLT", PartType::FaceBolt),
        ("clear wheel", PartType::EnergyRing),
        ("metal wheel", PartType::FusionWheel),
        ("  Spin Track ", PartType::SpinTrack),
        ("bottom", PartType::PerformanceTip),
    ];
    for (input, expected) in cases {
        let parsed: PartType = input.parse().unwrap();
        assert_eq!(parsed, expected, "alias '{}' should resolve", input);
    }
}

#[test]
fn unknown_part_type_is_rejected() {
    let err = "Launcher".parse::<PartType>().unwrap_err();
    assert!(err.to_string().contains("Launcher"));
}

#[test]
fn part_types_are_in_slot_order() {
    let names: Vec<_> = PartType::all().iter().map(|t| t.display_name()).collect();
    assert_eq!(
        names,
        [
            "Face Bolt",
            "Energy Ring",
            "Fusion Wheel",
            "Spin Track",
            "Performance Tip"
        ]
    );
}

#[test]
fn beyblade_type_parse_is_case_insensitive() {
    assert_eq!("attack".parse::<BeybladeType>().unwrap(), BeybladeType::Attack);
    assert_eq!("DEFENSE".parse::<BeybladeType>().unwrap(), BeybladeType::Defense);
    assert_eq!("Stamina".parse::<BeybladeType>().unwrap(), BeybladeType::Stamina);
    assert_eq!(" balance ".parse::<BeybladeType>().unwrap(), BeybladeType::Balance);
}

#[test]
fn unknown_beyblade_type_is_rejected() {
    assert!("Speed".parse::<BeybladeType>().is_err());
    assert!("".parse::<BeybladeType>().is_err());
}

#[test]
fn beyblade_type_choices_lists_all() {
    assert_eq!(BeybladeType::choices(), "Attack, Defense, Stamina, Balance");
}
