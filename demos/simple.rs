//! Basic usage example

use assertenv::{EnvSchema, Enum, RequiredIntList, RequiredText, TextList, Validator};

#[derive(Debug, Default, EnvSchema)]
struct AppEnv {
    // Required: validation fails if BEEP is unset or empty
    #[env(name = "BEEP")]
    beep: RequiredText,

    // Optional, but must be one of the listed values when set
    #[env(name = "BOOP", values = "testing,one,two")]
    boop: Enum,

    // Falls back to a literal when BRRT is empty
    #[env(name = "BRRT", default = "fallback value")]
    brrt: RequiredText,

    // Split on ':' instead of ','
    #[env(name = "BZZT", separator = ":")]
    bzzt: TextList,

    #[env(name = "BOMF")]
    bomf: RequiredIntList,
}

fn main() {
    // Set environment variables for demonstration
    std::env::set_var("BEEP", "hello world");
    std::env::set_var("BZZT", "bee:goes:buzz");
    std::env::set_var("BOMF", "1,2,3");

    // Invalid configuration is fatal at start-up
    let mut app_env = AppEnv::default();
    Validator::new(&mut app_env).validate_or_panic();

    println!("Configuration loaded:");
    println!("  Beep: {}", app_env.beep);
    println!("  Boop: {}", app_env.boop);
    println!("  Brrt: {}", app_env.brrt);
    println!("  Bzzt ({}): {}", app_env.bzzt.len(), app_env.bzzt);
    println!("  Bomf ({}): {}", app_env.bomf.len(), app_env.bomf);
}
