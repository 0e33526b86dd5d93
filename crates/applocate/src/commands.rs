use crate::{FindArgs, TargetArgs};
use anyhow::Context;
use applocate_common::{ElementDescriptor, LocateError, Locator, PerPlatform, Platform};
use applocate_engine::config::schema::ApplocateConfig;
use applocate_engine::finder::ElementFinder;
use applocate_engine::resolver::{IdFallback, LocatorResolver};
use applocate_engine::session::Session;
use applocate_engine::wait::WaitPolicy;
use applocate_remote::AppiumSession;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Turn the mutually exclusive target flags into a descriptor. Platform-specific
/// flags only fill the slot of the platform being driven.
pub fn descriptor_for(
    config: &ApplocateConfig,
    platform: Platform,
    target: &TargetArgs,
) -> anyhow::Result<ElementDescriptor> {
    if let Some(name) = &target.element {
        return Ok(config.require_element(name)?.clone());
    }
    if let Some(label) = &target.accessibility_id {
        return Ok(ElementDescriptor::accessibility_label(label.clone()));
    }
    if let Some(name) = &target.class_name {
        return Ok(ElementDescriptor::type_name(PerPlatform::only(
            platform,
            name.clone(),
        )));
    }
    if let Some(xpath) = &target.xpath {
        return Ok(ElementDescriptor::raw(PerPlatform::only(
            platform,
            Locator::xpath(xpath.clone()),
        )));
    }
    if let Some(id) = &target.id {
        return Ok(ElementDescriptor::raw(PerPlatform::only(
            platform,
            Locator::id(id.clone()),
        )));
    }
    anyhow::bail!("no element target given")
}

/// The config's fallback policy, unless the flag forces it on.
pub fn resolver_for(config: &ApplocateConfig, allow_id_fallback: bool) -> LocatorResolver {
    if allow_id_fallback {
        LocatorResolver::new(IdFallback::AccessibilityId)
    } else {
        config.resolver()
    }
}

pub fn policy_for(
    config: &ApplocateConfig,
    timeout_ms: Option<u64>,
    poll_interval_ms: Option<u64>,
) -> Result<WaitPolicy, LocateError> {
    WaitPolicy::new(
        Duration::from_millis(timeout_ms.unwrap_or(config.wait.timeout_ms)),
        Duration::from_millis(poll_interval_ms.unwrap_or(config.wait.poll_interval_ms)),
    )
}

/// Token cancelled on Ctrl-C so a pending wait ends and the session still gets released.
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling wait.");
            trigger.cancel();
        }
    });
    token
}

pub async fn open_session(
    config: &ApplocateConfig,
    platform: Platform,
) -> anyhow::Result<AppiumSession> {
    let profile = config.devices.profile(platform).clone();
    let mut session = AppiumSession::new(config.server.url.clone(), platform, profile);
    session
        .launch()
        .await
        .with_context(|| format!("Failed to start {} session", platform))?;
    Ok(session)
}

pub async fn close_session<S: Session + ?Sized>(session: &mut S) {
    if let Err(e) = session.release().await {
        warn!("Failed to release session: {}", e);
    }
}

pub async fn find(config: &ApplocateConfig, args: FindArgs) -> anyhow::Result<()> {
    // Config and resolution problems surface before a session is started.
    let descriptor = descriptor_for(config, args.platform, &args.target)?;
    let resolver = resolver_for(config, args.allow_id_fallback);
    let locator = resolver.resolve(&descriptor, args.platform)?;
    let policy = policy_for(config, args.timeout_ms, args.poll_interval_ms)?;
    let finder = ElementFinder::new(resolver, policy).with_cancellation(cancel_on_ctrl_c());

    let mut session = open_session(config, args.platform).await?;
    info!("Looking up {}", locator);
    let outcome = if args.no_wait {
        finder.find_locator(&mut session, &locator).await
    } else {
        finder.wait_for_locator(&mut session, &locator).await
    };
    close_session(&mut session).await;

    let handle = outcome?;
    println!("{}", handle);
    Ok(())
}

pub fn resolve(
    config: &ApplocateConfig,
    platform: Platform,
    element: &str,
    allow_id_fallback: bool,
) -> anyhow::Result<()> {
    let descriptor = config.require_element(element)?;
    let locator = resolver_for(config, allow_id_fallback).resolve(descriptor, platform)?;
    println!("{}\t{}", locator.strategy.wire_name(), locator.selector);
    Ok(())
}

pub fn print_config(config: &ApplocateConfig) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize config")?;
    print!("{}", yaml);
    Ok(())
}
