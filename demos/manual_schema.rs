//! Writing a schema by hand instead of deriving it

use assertenv::lookup::from_map;
use assertenv::{EnvSchema, Field, Int, RequiredUrl, Schema};

#[derive(Debug, Default)]
struct Upstream {
    url: RequiredUrl,
    timeout_ms: Int,
}

impl EnvSchema for Upstream {
    fn schema() -> Schema<Self> {
        Schema::new()
            .field(Field::bind("url", |u: &mut Self| &mut u.url).key("UPSTREAM_URL"))
            .field(
                Field::bind("timeout_ms", |u: &mut Self| &mut u.timeout_ms)
                    .key("UPSTREAM_TIMEOUT_MS")
                    .fallback("5000"),
            )
    }
}

fn main() -> anyhow::Result<()> {
    let lookup = from_map([("UPSTREAM_URL", "http://upstream.internal")]);
    let upstream = Upstream::from_lookup(lookup)?;

    for field in Upstream::schema().fields() {
        println!("{} ({:?}): {:?}", field.name(), field.kind(), field.meta().key);
    }
    println!("Upstream: {} (timeout {}ms)", upstream.url, upstream.timeout_ms);
    Ok(())
}
