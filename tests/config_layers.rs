use std::fs;

use slingshot::core::config::GameConfig;
use slingshot::gameplay::collision::ContactRule;

fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn later_layers_override_nested_fields() {
    let dir = tempfile::tempdir().unwrap();
    let base = write(
        &dir,
        "base.ron",
        r#"(
            window: (width: 800.0, height: 600.0, title: "Base"),
            rest: (epsilon: 0.2, symmetric: true),
            launch: (impulse_scale: 1.0),
        )"#,
    );
    let local = write(&dir, "local.ron", "(rest: (symmetric: false), scoring: (rule: Category))");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.title, "Base");
    assert_eq!(cfg.window.width, 800.0);
    assert_eq!(cfg.rest.epsilon, 0.2);
    assert!(!cfg.rest.symmetric);
    assert_eq!(cfg.scoring.rule, ContactRule::Category);
    assert_eq!(cfg.projectile.mass, 0.25);
}

#[test]
fn missing_and_broken_layers_are_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(&dir, "good.ron", "(gravity: (y: -300.0))");
    let broken = write(&dir, "broken.ron", "(gravity: (y: ");
    let missing = dir.path().join("nope.ron");

    let (cfg, used, errors) = GameConfig::load_layered([&good, &broken, &missing]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 2);
    assert_eq!(cfg.gravity.y, -300.0);
}

#[test]
fn shipped_config_matches_defaults() {
    let (cfg, used, errors) = GameConfig::load_layered(["assets/config/game.ron"]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 1);
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty());
}
