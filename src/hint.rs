// Branch prediction hints. Only available on nightly; the stable fallback
// compiles to nothing.
cfg_if::cfg_if! {
    if #[cfg(feature = "nightly")] {
        pub(crate) use core::intrinsics::{likely, unlikely};
    } else {
        #[inline]
        pub(crate) fn likely(b: bool) -> bool {
            b
        }
        #[inline]
        pub(crate) fn unlikely(b: bool) -> bool {
            b
        }
    }
}
