use sovran_any::{any_cast_ref, make_any, make_any_from_iter, AnyValue, BadCast};
use std::collections::BTreeMap;

// Each plugin decides what its settings look like; the host only keeps them around.
#[derive(Debug, Clone)]
struct RetryPolicy {
    attempts: u32,
    backoff_ms: u64,
}

impl From<(u32, u64)> for RetryPolicy {
    fn from((attempts, backoff_ms): (u32, u64)) -> Self {
        Self {
            attempts,
            backoff_ms,
        }
    }
}

struct Host {
    settings: BTreeMap<&'static str, AnyValue>,
}

impl Host {
    fn new() -> Self {
        Self {
            settings: BTreeMap::new(),
        }
    }

    fn register(&mut self, plugin: &'static str, settings: AnyValue) {
        self.settings.insert(plugin, settings);
    }

    fn settings_for(&self, plugin: &str) -> Option<&AnyValue> {
        self.settings.get(plugin)
    }
}

fn main() -> Result<(), BadCast> {
    env_logger::init();

    let mut host = Host::new();
    host.register("http", make_any::<RetryPolicy, _>((3, 250)));
    host.register("banner", make_any::<String, _>("Welcome!"));
    host.register("ports", make_any_from_iter::<Vec<u16>, _>([8080, 8443]));
    host.register("disabled", AnyValue::new());

    // The http plugin knows its own settings type
    let policy = host
        .settings_for("http")
        .ok_or(BadCast)?
        .get::<RetryPolicy>()?;
    println!(
        "http: {} attempts, {}ms backoff",
        policy.attempts, policy.backoff_ms
    );

    // Guessing wrong is not fatal with the Option accessor
    match any_cast_ref::<RetryPolicy>(host.settings_for("banner")) {
        Some(policy) => println!("banner unexpectedly has a retry policy: {:?}", policy),
        None => println!("banner has no retry policy"),
    }

    // Missing plugins and empty settings look the same to the caller
    for plugin in ["ports", "disabled", "unknown"] {
        match any_cast_ref::<Vec<u16>>(host.settings_for(plugin)) {
            Some(ports) => println!("{}: ports {:?}", plugin, ports),
            None => println!("{}: no ports", plugin),
        }
    }

    // Settings can be copied and changed without touching the registered ones
    let mut override_banner = host.settings_for("banner").cloned().unwrap_or_default();
    if let Some(text) = override_banner.downcast_mut::<String>() {
        text.push_str(" (maintenance)");
    }
    println!(
        "banner: {:?} -> {:?}",
        any_cast_ref::<String>(host.settings_for("banner")),
        override_banner.get::<String>()?
    );

    Ok(())
}
