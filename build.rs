fn main() {
    // Host builds (tests, fuzzing) compile without the ESP-IDF toolchain.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
