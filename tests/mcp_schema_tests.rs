use dip_mcp_server::features::mcp::schemas::build_tool_schemas;

#[test]
fn dip_and_math_tools_are_registered() {
    let (definitions, input_schemas) = build_tool_schemas();

    let person_tool = definitions
        .iter()
        .find(|tool| tool.name == "dip.get_person")
        .expect("get_person tool definition present");
    let distribution_tool = definitions
        .iter()
        .find(|tool| tool.name == "dip.get_party_distribution")
        .expect("party distribution tool definition present");

    assert!(input_schemas.contains_key("dip.get_person"));
    assert!(input_schemas.contains_key("dip.get_party_distribution"));

    assert_eq!(person_tool.title, "Search Bundestag members");
    assert_eq!(
        distribution_tool.title,
        "Party distribution for an electoral period"
    );

    for name in [
        "math.add",
        "math.subtract",
        "math.multiply",
        "math.divide",
        "utilities.current_datetime",
    ] {
        assert!(
            definitions.iter().any(|tool| tool.name == name),
            "missing tool definition: {name}"
        );
        assert!(input_schemas.contains_key(name), "missing schema: {name}");
    }
}

#[test]
fn wahlperiode_bounds_are_encoded_in_schemas() {
    let (_, input_schemas) = build_tool_schemas();

    let schema = &input_schemas["dip.get_party_distribution"];
    assert_eq!(schema["properties"]["wahlperiode"]["minimum"], 1);
    assert_eq!(schema["properties"]["wahlperiode"]["maximum"], 21);
    assert_eq!(schema["required"][0], "wahlperiode");
}
