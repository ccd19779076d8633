use crate::{
    build::{and, eq, not, or},
    node::Node,
};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; `RUST_LOG` controls verbosity.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Record visible to its owner or to anyone when public.
pub(crate) fn record_access_tree() -> Node {
    let private_owned = and([eq("status", "private"), eq("owner", "theUser")]).expect("and");
    let visible = or([not(eq("status", "private")), private_owned]).expect("or");

    and([eq("id", "theRecordId"), visible]).expect("and")
}
