use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.images_dir.ends_with("public/images"));
}

#[test]
fn parses_overrides() {
    let cfg = SiteConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("IMAGES_DIR", "/srv/ink/images")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.images_dir, PathBuf::from("/srv/ink/images"));
}

#[test]
fn rejects_bad_port() {
    let err = SiteConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

#[test]
fn rejects_out_of_range_port() {
    assert!(SiteConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn rejects_blank_images_dir() {
    let err = SiteConfig::from_lookup(lookup(&[("IMAGES_DIR", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyImagesDir));
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "4123");
        std::env::remove_var("IMAGES_DIR");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4123);

    unsafe { std::env::remove_var("PORT") };
}
