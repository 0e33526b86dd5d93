//! Guided lookup on the login screen of TheApp.
//!
//! Waits for the screen by accessibility id, which is the same on both
//! platforms, then shows a class-name and an XPath lookup, which are not.

use crate::commands::{cancel_on_ctrl_c, close_session, open_session};
use applocate_common::{ElementDescriptor, ElementHandle, LocateError, Locator, PerPlatform, Platform};
use applocate_engine::config::schema::ApplocateConfig;
use applocate_engine::finder::ElementFinder;
use applocate_engine::session::Session;
use tracing::info;

pub struct Step {
    pub name: &'static str,
    pub descriptor: ElementDescriptor,
    /// Poll for the element instead of a single lookup.
    pub wait: bool,
}

pub fn steps() -> Vec<Step> {
    vec![
        Step {
            name: "login screen",
            descriptor: ElementDescriptor::accessibility_label("Login Screen"),
            wait: true,
        },
        Step {
            name: "static text",
            descriptor: ElementDescriptor::type_name(
                PerPlatform::new()
                    .with_ios("XCUIElementTypeStaticText")
                    .with_android("android.widget.TextView"),
            ),
            wait: false,
        },
        Step {
            name: "webview demo",
            descriptor: ElementDescriptor::raw(
                PerPlatform::new()
                    .with_ios(Locator::xpath(
                        r#"//XCUIElementTypeOther[@label="Webview Demo"]"#,
                    ))
                    .with_android(Locator::xpath(
                        r#"//android.widget.TextView[@text="Webview Demo"]"#,
                    )),
            ),
            wait: false,
        },
    ]
}

/// Run `steps` in order, stopping at the first failure.
pub async fn run_steps<S>(
    session: &mut S,
    finder: &ElementFinder,
    steps: &[Step],
) -> Result<Vec<(&'static str, ElementHandle)>, LocateError>
where
    S: Session + ?Sized,
{
    let mut found = Vec::with_capacity(steps.len());
    for step in steps {
        let locator = finder.locate(session, &step.descriptor)?;
        info!("{}: {}", step.name, locator);
        let handle = if step.wait {
            finder.wait_for_locator(session, &locator).await?
        } else {
            finder.find_locator(session, &locator).await?
        };
        found.push((step.name, handle));
    }
    Ok(found)
}

pub async fn run(config: &ApplocateConfig, platform: Platform) -> anyhow::Result<()> {
    let finder = ElementFinder::new(config.resolver(), config.wait.policy()?)
        .with_cancellation(cancel_on_ctrl_c());

    let mut session = open_session(config, platform).await?;
    let outcome = run_steps(&mut session, &finder, &steps()).await;
    close_session(&mut session).await;

    for (name, handle) in outcome? {
        println!("{}\t{}", name, handle);
    }
    Ok(())
}
