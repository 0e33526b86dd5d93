use applocate_engine::resolver::{IdFallback, LocatorResolver, resolve};
use applocate_engine::{
    DescriptorKind, ElementDescriptor, LocateError, Locator, LocatorStrategy, PerPlatform,
    Platform,
};

fn static_text() -> ElementDescriptor {
    ElementDescriptor::type_name(
        PerPlatform::new()
            .with_ios("XCUIElementTypeStaticText")
            .with_android("android.widget.TextView"),
    )
}

fn webview_demo() -> ElementDescriptor {
    ElementDescriptor::raw(
        PerPlatform::new()
            .with_ios(Locator::xpath(
                r#"//XCUIElementTypeOther[@label="Webview Demo"]"#,
            ))
            .with_android(Locator::xpath(
                r#"//android.widget.TextView[@text="Webview Demo"]"#,
            )),
    )
}

#[test]
fn test_accessibility_label_is_identical_on_both_platforms() {
    let descriptor = ElementDescriptor::accessibility_label("Login Screen");

    let ios = resolve(&descriptor, Platform::Ios).unwrap();
    let android = resolve(&descriptor, Platform::Android).unwrap();

    assert_eq!(ios, Locator::accessibility_id("Login Screen"));
    assert_eq!(ios, android);
}

#[test]
fn test_accessibility_label_keeps_label_verbatim() {
    for label in ["Login Screen", "  padded  ", "Ünïcödé ✓", ""] {
        let descriptor = ElementDescriptor::accessibility_label(label);
        for platform in Platform::ALL {
            let locator = resolve(&descriptor, platform).unwrap();
            assert_eq!(locator.strategy, LocatorStrategy::AccessibilityId);
            assert_eq!(locator.selector, label);
        }
    }
}

#[test]
fn test_type_name_resolves_per_platform() {
    let descriptor = static_text();

    assert_eq!(
        resolve(&descriptor, Platform::Android).unwrap(),
        Locator::class_name("android.widget.TextView")
    );
    assert_eq!(
        resolve(&descriptor, Platform::Ios).unwrap(),
        Locator::class_name("XCUIElementTypeStaticText")
    );
}

#[test]
fn test_type_name_missing_platform_value() {
    let descriptor =
        ElementDescriptor::type_name(PerPlatform::new().with_android("android.widget.TextView"));

    let err = resolve(&descriptor, Platform::Ios).unwrap_err();
    match err {
        LocateError::MissingPlatformValue { platform, kind } => {
            assert_eq!(platform, Platform::Ios);
            assert_eq!(kind, DescriptorKind::TypeName);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_raw_xpath_is_returned_verbatim_per_platform() {
    let descriptor = webview_demo();

    let ios = resolve(&descriptor, Platform::Ios).unwrap();
    let android = resolve(&descriptor, Platform::Android).unwrap();

    assert_eq!(
        ios,
        Locator::xpath(r#"//XCUIElementTypeOther[@label="Webview Demo"]"#)
    );
    assert_eq!(
        android,
        Locator::xpath(r#"//android.widget.TextView[@text="Webview Demo"]"#)
    );
    assert_ne!(ios, android);
}

#[test]
fn test_raw_missing_platform_value() {
    let descriptor = ElementDescriptor::raw(
        PerPlatform::new().with_ios(Locator::xpath("//XCUIElementTypeButton")),
    );

    let err = resolve(&descriptor, Platform::Android).unwrap_err();
    assert!(matches!(
        err,
        LocateError::MissingPlatformValue {
            platform: Platform::Android,
            kind: DescriptorKind::RawLocator,
        }
    ));
}

#[test]
fn test_id_on_android_passes_through() {
    let descriptor = ElementDescriptor::raw(
        PerPlatform::new().with_android(Locator::id("io.cloudgrey.the_app:id/username")),
    );

    let locator = resolve(&descriptor, Platform::Android).unwrap();
    assert_eq!(locator, Locator::id("io.cloudgrey.the_app:id/username"));
}

#[test]
fn test_id_on_ios_is_rejected_by_default() {
    let descriptor = ElementDescriptor::raw(PerPlatform::new().with_ios(Locator::id("username")));

    let err = resolve(&descriptor, Platform::Ios).unwrap_err();
    assert!(matches!(
        err,
        LocateError::UnsupportedOnPlatform {
            strategy: LocatorStrategy::Id,
            platform: Platform::Ios,
        }
    ));
    assert!(err.is_resolution_error());
}

#[test]
fn test_id_on_ios_falls_back_when_enabled() {
    let resolver = LocatorResolver::new(IdFallback::AccessibilityId);
    let descriptor = ElementDescriptor::raw(PerPlatform::new().with_ios(Locator::id("username")));

    let locator = resolver.resolve(&descriptor, Platform::Ios).unwrap();
    assert_eq!(locator, Locator::accessibility_id("username"));
}

#[test]
fn test_fallback_does_not_touch_other_strategies() {
    let resolver = LocatorResolver::new(IdFallback::AccessibilityId);
    let descriptor = webview_demo();

    let locator = resolver.resolve(&descriptor, Platform::Ios).unwrap();
    assert_eq!(locator.strategy, LocatorStrategy::XPath);
}

#[test]
fn test_resolution_is_repeatable() {
    let descriptor = static_text();
    let first = resolve(&descriptor, Platform::Android).unwrap();
    let second = resolve(&descriptor, Platform::Android).unwrap();
    assert_eq!(first, second);
}
