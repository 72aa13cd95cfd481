use core::mem;

/// A string slice that is statically guaranteed to contain at least one
/// character
#[derive(Debug)]
#[repr(transparent)]
pub struct PopulatedStr(str);

impl PopulatedStr {
    /// SAFETY: the string must not be empty
    #[inline(always)]
    pub unsafe fn new_unchecked(s: &str) -> &Self {
        debug_assert!(!s.is_empty());

        // SAFETY: PopulatedStr is repr transparent to str, so the pointer
        // metadata carries over unchanged.
        unsafe { mem::transmute(s) }
    }

    #[inline]
    pub fn new(s: &str) -> Option<&Self> {
        match s.is_empty() {
            true => None,
            // Safety: we just confirmed that the string isn't empty
            false => Some(unsafe { Self::new_unchecked(s) }),
        }
    }

    /// Split off the first character. The whole point: there's always one.
    #[inline]
    pub fn split_first(&self) -> (char, &str) {
        let mut chars = self.0.chars();

        // Safety: `self.0` is guaranteed to be non-empty, so there is a
        // first character
        let first = unsafe { chars.next().unwrap_unchecked() };

        (first, chars.as_str())
    }
}
