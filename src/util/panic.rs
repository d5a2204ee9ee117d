/// Asserts that the provided block panics. When a pattern is given, the panic message must also
/// contain it, which is how tests tell the different precondition failures apart.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $contains:literal) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($contains),
                    "panic message {:?} doesn't contain {:?}", message, $contains
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
