const OVERRIDES: [&str; 4] = [
    "IRRIGATION_WIFI_SSID",
    "IRRIGATION_WIFI_PASSWORD",
    "IRRIGATION_FIREBASE_HOST",
    "IRRIGATION_DEVICE_ID",
];

fn main() {
    // config.rs reads these through option_env!
    for var in OVERRIDES {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
