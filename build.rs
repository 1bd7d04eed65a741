fn cfg(name: &str) -> String {
    std::env::var(format!("CARGO_CFG_{}", name.to_uppercase())).unwrap_or_default()
}

fn make_overridable_cfg(name: &str, logic: impl FnOnce() -> &'static str) {
    let env_name = format!("TRYBLOCK_{}", name.to_uppercase());
    println!("cargo::rerun-if-env-changed={env_name}");
    let value = std::env::var(env_name).unwrap_or_else(|_| logic().to_string());
    println!("cargo::rustc-cfg={name}=\"{value}\"");
}

fn main() {
    // std is assumed to be present: probing for it misses `-Z build-std` builds [1].
    //
    // [1]: https://github.com/cuviper/autocfg/issues/34
    make_overridable_cfg("backend", || {
        if cfg("panic") == "abort" {
            // Nothing unwinds, so there is nothing to intercept.
            "abort"
        } else {
            "panic"
        }
    });
}
