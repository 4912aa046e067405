/// Evaluates an `(value, overflowed)` expression and panics on overflow when
/// overflow checks are enabled, the same way native integer operators do.
#[macro_export]
macro_rules! overflow_check {
    ($op:literal, $($c:tt)+) => {
        {
            // 'overflow' variable may be unused in release mode.
            #[allow(unused_variables)]
            let (result, overflow) = $($c)+;

            #[cfg(any(overflow_check, debug_assertions))]
            {
                if overflow {
                    panic!(concat!("attempt to ", $op, " with overflow"))
                }
            }

            result
        }
    };
}

#[cfg(any(overflow_check, debug_assertions))]
pub const CHECKING_OVERFLOW: bool = true;

#[cfg(not(any(overflow_check, debug_assertions)))]
pub const CHECKING_OVERFLOW: bool = false;
