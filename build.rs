use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct Config {
    application: Application,
    native: Native,
    probe: Probe,
}

#[derive(Deserialize)]
struct Application {
    name: String,
    version: String,
}

#[derive(Deserialize)]
struct Native {
    pkg_config_name: String,
    windows_lib: String,
    macos_framework: String,
}

#[derive(Deserialize)]
struct Probe {
    device: String,
    attributes: Vec<i32>,
    hold_secs: u64,
}

// 在编译时读取 config.toml，导出探测程序的默认参数并链接 OpenAL
fn main() {
    println!("cargo:rerun-if-changed=config.toml");
    println!("cargo:rerun-if-env-changed=MUSL_SYSROOT");

    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        panic!("config.toml not found!");
    }

    let config_str = fs::read_to_string(config_path).expect("Failed to read config.toml");
    let config: Config = toml::from_str(&config_str).expect("Failed to parse config.toml");

    // 应用信息
    println!("cargo:rustc-env=APP_NAME={}", config.application.name);
    println!("cargo:rustc-env=APP_VERSION={}", config.application.version);

    // 探测参数
    println!("cargo:rustc-env=PROBE_DEVICE={}", config.probe.device);
    let attributes: Vec<String> = config
        .probe
        .attributes
        .iter()
        .map(|a| a.to_string())
        .collect();
    println!("cargo:rustc-env=PROBE_ATTRIBUTES={}", attributes.join(","));
    println!("cargo:rustc-env=PROBE_HOLD_SECS={}", config.probe.hold_secs);

    link_openal(&config.native);
}

fn link_openal(native: &Native) {
    let target = std::env::var("TARGET").unwrap_or_default();

    if target.contains("apple") {
        println!("cargo:rustc-link-lib=framework={}", native.macos_framework);
        return;
    }

    if target.contains("windows") {
        println!("cargo:rustc-link-lib=dylib={}", native.windows_lib);
        return;
    }

    if target.contains("musl") {
        // musl 目标：使用手动编译的静态库，不依赖 pkg-config
        if let Ok(sysroot) = std::env::var("MUSL_SYSROOT") {
            println!("cargo:rustc-link-search=native={}/usr/lib", sysroot);
        }
        println!("cargo:rustc-link-lib=static={}", native.pkg_config_name);
        return;
    }

    // 其他目标：通过 pkg-config 查找 libopenal
    pkg_config::Config::new()
        .probe(&native.pkg_config_name)
        .expect("Failed to find OpenAL. Please install libopenal-dev.");
}
