use super::*;

#[test]
fn command_maps_each_kind() {
    let fetch = FetchSettings::default();
    assert_eq!(fetch.command(FetchKind::Quote).program, "python3");
    assert_eq!(
        fetch.command(FetchKind::Options).args,
        vec!["py/options/cli_fetch.py".to_string()]
    );
    assert_eq!(fetch.command(FetchKind::Quote).working_dir, None);
}

#[test]
fn default_presets_start_with_default_period() {
    let presets = IndicatorSettings::default().presets;
    assert_eq!(presets[0].period, DEFAULT_RSI_PERIOD);
    assert_eq!(presets[0].label, "RSI 14");
    assert_eq!(
        presets.iter().map(|p| p.color.as_str()).collect::<Vec<_>>(),
        ["cyan", "yellow", "magenta"]
    );
}

#[test]
fn preset_color_defaults_when_missing() {
    let indicator: IndicatorSettings =
        serde_json::from_str(r#"{ "presets": [{ "label": "Fast", "period": 3 }] }"#).unwrap();
    assert_eq!(indicator.presets.len(), 1);
    assert_eq!(indicator.presets[0].color, "white");
}

#[test]
fn serialized_defaults_round_trip() {
    let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
    assert!(json.contains("\"mode\": \"background\""));
    assert!(!json.contains("working_dir"));

    let decoded: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.fetch.timeout_ms, Some(DEFAULT_FETCH_TIMEOUT_MS));
    assert_eq!(decoded.log.capacity, Some(DEFAULT_LOG_CAPACITY));
    assert_eq!(decoded.fetch.quote, CommandSpec::new("python3", &["py/yfclient/fetch.py"]));
}

#[test]
fn theme_overrides_are_optional() {
    let theme: ThemeSettings = serde_json::from_str(r##"{ "accent_fg": "#FF8800" }"##).unwrap();
    assert_eq!(theme.accent_fg.as_deref(), Some("#FF8800"));
    assert_eq!(theme.border, None);
}
