fn main() {
    println!("cargo:rerun-if-env-changed=OCCUPANCY_CONFIG_JSON");

    // Host builds (tests, simulation) have no ESP-IDF sysroot to export.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
