//! Integration tests for config loading

use colorized::{ColorPair, ColorSpec, Config, ConfigError, Foreground, Rgb, Style};

use crate::helpers::temp_config;

#[test]
fn load_from_file() {
    let (_dir, path) = temp_config(
        "[defaults]\nstyle = \"blink\"\nfg = \"#102030\"\nbg = \"0,0,0\"\nreset = false\n",
    );
    let config = Config::load(Some(path.as_path())).unwrap();

    assert_eq!(config.defaults.style, Style::Blink);
    assert_eq!(config.defaults.fg, ColorSpec::Rgb(Rgb::new(16, 32, 48)));
    assert!(!config.defaults.reset);
    assert_eq!(
        config.defaults.colors().unwrap(),
        ColorPair::Rgb {
            fg: Rgb::new(16, 32, 48),
            bg: Rgb::new(0, 0, 0)
        }
    );
}

#[test]
fn empty_file_is_defaults() {
    let (_dir, path) = temp_config("");
    assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let (_dir, path) = temp_config("[defaults]\nfg = \"red\"\n\n[future]\nthing = 1\n");
    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.defaults.fg, ColorSpec::Named(Foreground::Red));
}

#[test]
fn invalid_color_is_parse_error() {
    let (_dir, path) = temp_config("[defaults]\nfg = \"ultraviolet\"\n");
    let err = Config::load(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn saved_toml_loads_back() {
    let mut config = Config::default();
    config.defaults.style = Style::Underline;
    config.defaults.fg = "deep-sky-blue3".parse().unwrap();
    config.defaults.bg = "232".parse().unwrap();

    let (_dir, path) = temp_config(&config.to_toml().unwrap());
    assert_eq!(Config::load(Some(path.as_path())).unwrap(), config);
}
