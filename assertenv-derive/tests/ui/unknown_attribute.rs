use assertenv::{EnvSchema, RequiredText};

#[derive(Default, EnvSchema)]
struct Config {
    #[env(name = "COLOUR", colour = "red")]
    colour: RequiredText,
}

fn main() {
    let _ = Config::default().colour;
}
