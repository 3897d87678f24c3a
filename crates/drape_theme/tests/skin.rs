//! Skin loading, inheritance and resolution through to painting

use drape_border::{Border, BorderWidth, ColorSupport, LineBorder};
use drape_paint::{Color, ContextEvent, RecordingContext, Rect, Shape, Stroke};
use drape_theme::{
    default_skin, Skin, SkinPreset, StateSet, ThemeError, DISABLED, FOCUSED, HOVER, SELECTED,
};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("drape_theme=debug")
        .try_init();
}

fn states<const N: usize>(names: [&str; N]) -> StateSet {
    StateSet::from_states(names)
}

#[test]
fn default_skin_catalog() {
    let skin = default_skin().unwrap();
    assert_eq!(
        skin.style_ids(),
        vec!["button", "label", "panel", "text-field", "toggle-button"]
    );
    assert_eq!(skin.name(), Some("Light"));
}

#[test]
fn disabled_button_paints_translucent() {
    init_tracing();
    let skin = default_skin().unwrap();
    let border = skin.resolve("button", &states([DISABLED])).unwrap().unwrap();
    assert_eq!(border.opacity(), 0.5);
    assert_eq!(border.width(), BorderWidth::uniform(1));

    let bounds = Rect::new(0.0, 0.0, 80.0, 24.0);
    let mut ctx = RecordingContext::new();
    border
        .paint(&mut ctx, bounds, &(), &(), &Shape::Rect(bounds))
        .unwrap();

    let kinds: Vec<_> = ctx.events().iter().map(ContextEvent::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "begin_alpha",
            "begin_stroke",
            "begin_paint",
            "draw",
            "end_paint",
            "end_stroke",
            "end_alpha"
        ]
    );
    assert_eq!(ctx.events()[2], ContextEvent::BeginPaint(Color::from_hex(0xaaaaaa)));
    assert!(ctx.state().is_pristine());
}

#[test]
fn child_inherits_parent_decorations() {
    let skin = default_skin().unwrap();

    let plain = skin
        .resolve("toggle-button", &StateSet::new())
        .unwrap()
        .unwrap();
    assert_eq!(plain, skin.resolve("button", &StateSet::new()).unwrap().unwrap());

    let selected = skin
        .resolve("toggle-button", &states([SELECTED]))
        .unwrap()
        .unwrap();
    assert_eq!(selected.color(), Color::from_hex(0x2b7bd6));
    assert_eq!(selected.stroke, Some(Stroke::basic(1.0)));
    assert_eq!(selected.base.id.as_deref(), Some("border"));
}

#[test]
fn child_decoration_wins_over_parent_at_same_specificity() {
    let skin = default_skin().unwrap();
    let focused = skin
        .resolve("text-field", &states([FOCUSED, HOVER]))
        .unwrap()
        .unwrap();
    assert_eq!(focused.color(), Color::from_hex(0x3399ff));
    assert_eq!(focused.width(), BorderWidth::uniform(1));
}

#[test]
fn overwrite_without_border_clears_inherited() {
    let skin = default_skin().unwrap();
    assert_eq!(skin.resolve("label", &StateSet::new()).unwrap(), None);
    assert!(skin.resolve("panel", &StateSet::new()).unwrap().is_some());
}

#[test]
fn overwrite_restarts_from_fragment() {
    let skin: Skin<LineBorder> = Skin::from_toml_str(
        r##"
[styles.base]
[[styles.base.decorations]]
border = { opacity = 0.4, color = "#000000", stroke = { width = 2.0 } }

[styles.flat]
extends = "base"
[[styles.flat.decorations]]
states = ["hover"]
overwrite = true
border = { color = "#ff0000" }
"##,
    )
    .unwrap();

    let hovered = skin.resolve("flat", &states([HOVER])).unwrap().unwrap();
    assert_eq!(hovered, LineBorder::new().with_color(Color::RED));

    let idle = skin.resolve("flat", &StateSet::new()).unwrap().unwrap();
    assert_eq!(idle.opacity(), 0.4);
}

#[test]
fn inheritance_cycle_is_rejected() {
    let err = Skin::<LineBorder>::from_toml_str(
        r#"
[styles.a]
extends = "b"

[styles.b]
extends = "a"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ThemeError::InheritanceCycle(_)), "{err}");
}

#[test]
fn unknown_parent_is_rejected() {
    let err = Skin::<LineBorder>::from_toml_str(
        r#"
[styles.a]
extends = "missing"
"#,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "style `a` extends unknown style `missing`");
}

#[test]
fn malformed_color_is_a_parse_error() {
    let err = Skin::<LineBorder>::from_toml_str(
        r#"
[styles.a]
[[styles.a.decorations]]
border = { color = "not-a-color" }
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ThemeError::Parse(_)), "{err}");
}

#[test]
fn load_round_trips_through_disk() {
    init_tracing();
    let original = SkinPreset::Dark.skin().unwrap();
    let path = std::env::temp_dir().join(format!("drape-skin-{}.toml", std::process::id()));
    std::fs::write(&path, original.to_toml_string().unwrap()).unwrap();

    let loaded = Skin::<LineBorder>::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.style_ids(), original.style_ids());
    let focused = states([FOCUSED]);
    for id in original.style_ids() {
        assert_eq!(
            loaded.resolve(id, &focused).unwrap(),
            original.resolve(id, &focused).unwrap(),
            "style {id}"
        );
    }
}

#[test]
fn missing_file_reports_path() {
    let path = std::env::temp_dir().join("drape-no-such-skin.toml");
    let err = Skin::<LineBorder>::load(&path).unwrap_err();
    match err {
        ThemeError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other}"),
    }
}

#[test]
fn integer_values_resolve_like_floats() {
    let skin: Skin<LineBorder> = Skin::from_toml_str(
        r#"
[styles.slider]
[[styles.slider.decorations]]
border = { opacity = 1, stroke = { width = 3 } }
"#,
    )
    .unwrap();

    assert!(skin.contains_style("slider"));
    assert!(!skin.contains_style("button"));
    let border = skin.resolve("slider", &StateSet::new()).unwrap().unwrap();
    assert_eq!(border.opacity(), 1.0);
    assert_eq!(border.width(), BorderWidth::uniform(3));
}
