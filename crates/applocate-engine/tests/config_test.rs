use applocate_engine::config::loader::{ConfigError, ConfigLoader};
use applocate_engine::config::schema::ApplocateConfig;
use applocate_engine::resolver::{IdFallback, resolve};
use applocate_engine::{ElementDescriptor, Locator, LocatorStrategy, Platform};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_default_values() {
    let config = ApplocateConfig::default();
    assert_eq!(config.server.url, "http://localhost:4723");
    assert_eq!(config.wait.timeout_ms, 10000);
    assert_eq!(config.wait.poll_interval_ms, 500);
    assert_eq!(config.locator.id_fallback, IdFallback::Reject);
    assert!(config.elements.is_empty());
}

#[test]
fn test_default_device_profiles() {
    let config = ApplocateConfig::default();

    let ios = config.devices.profile(Platform::Ios);
    assert_eq!(ios.device_name.as_deref(), Some("iPhone 14 Pro"));
    assert_eq!(ios.automation_name.as_deref(), Some("XCUITest"));

    let android = config.devices.profile(Platform::Android);
    assert_eq!(android.platform_version.as_deref(), Some("13.2"));
    assert_eq!(android.automation_name.as_deref(), Some("UiAutomator2"));
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
server:
  url: http://127.0.0.1:4725
wait:
  timeout_ms: 15000
  poll_interval_ms: 250
locator:
  id_fallback: accessibility_id
devices:
  android:
    device_name: Pixel 7
    extra_capabilities:
      appium:noReset: true
"#
    )
    .unwrap();

    let config = ConfigLoader::load_from(file.path())
        .await
        .expect("Failed to load config from file");

    assert_eq!(config.server.url, "http://127.0.0.1:4725");
    assert_eq!(config.locator.id_fallback, IdFallback::AccessibilityId);

    let policy = config.wait.policy().unwrap();
    assert_eq!(policy.timeout(), Duration::from_secs(15));
    assert_eq!(policy.poll_interval(), Duration::from_millis(250));

    let android = config.devices.profile(Platform::Android);
    assert_eq!(android.device_name.as_deref(), Some("Pixel 7"));
    assert_eq!(
        android.extra_capabilities.get("appium:noReset"),
        Some(&serde_json::Value::Bool(true))
    );
    // Only android was overridden
    assert_eq!(
        config.devices.profile(Platform::Ios).device_name.as_deref(),
        Some("iPhone 14 Pro")
    );
}

#[tokio::test]
async fn test_load_named_elements() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
elements:
  login_screen:
    accessibility_label: Login Screen
  static_text:
    type_name:
      ios: XCUIElementTypeStaticText
      android: android.widget.TextView
  webview_demo:
    raw:
      ios: {{ strategy: xpath, selector: '//XCUIElementTypeOther[@label="Webview Demo"]' }}
      android: {{ strategy: xpath, selector: '//android.widget.TextView[@text="Webview Demo"]' }}
"#
    )
    .unwrap();

    let config = ConfigLoader::load_from(file.path()).await.unwrap();

    assert_eq!(
        config.element("login_screen"),
        Some(&ElementDescriptor::accessibility_label("Login Screen"))
    );

    let static_text = config.require_element("static_text").unwrap();
    assert_eq!(
        resolve(static_text, Platform::Android).unwrap(),
        Locator::class_name("android.widget.TextView")
    );

    let webview = config.require_element("webview_demo").unwrap();
    let ios = resolve(webview, Platform::Ios).unwrap();
    assert_eq!(ios.strategy, LocatorStrategy::XPath);
    assert_eq!(ios.selector, r#"//XCUIElementTypeOther[@label="Webview Demo"]"#);
}

#[test]
fn test_unknown_element_name() {
    let config = ApplocateConfig::default();
    let err = config.require_element("missing").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownElement(ref name) if name == "missing"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_load_from_nonexistent_file() {
    let result =
        ConfigLoader::load_from(std::path::Path::new("/nonexistent/path/applocate.yaml")).await;
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[tokio::test]
async fn test_load_from_invalid_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{invalid yaml: [unclosed").unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[tokio::test]
async fn test_load_from_empty_file_uses_defaults() {
    let file = NamedTempFile::new().unwrap();

    let config = ConfigLoader::load_from(file.path()).await.unwrap();
    assert_eq!(config.wait.timeout_ms, 10000);
}

#[tokio::test]
async fn test_load_with_type_mismatch() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
wait:
  timeout_ms: "ten seconds"
"#
    )
    .unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(result.is_err(), "Should fail on type mismatch");
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let result = ConfigLoader::parse(
        r##"
elements:
  bad:
    raw:
      ios: { strategy: css, selector: "#login" }
"##,
    );
    assert!(result.is_err());
}

#[test]
fn test_zero_poll_interval_fails_policy_conversion() {
    let config = ConfigLoader::parse(
        r#"
wait:
  poll_interval_ms: 0
"#,
    )
    .unwrap();
    assert!(config.wait.policy().is_err());
}
