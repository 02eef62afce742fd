use assertenv::EnvSchema;

#[derive(EnvSchema)]
enum Config {
    Beep,
}

fn main() {
    let _ = Config::Beep;
}
