//! In-place stepping: the pre-increment and pre-decrement forms.

/// `++x`: advance in place and hand the receiver back.
pub trait PreIncrement {
    fn increment(&mut self) -> &mut Self;
}

/// `--x`: retreat in place and hand the receiver back.
pub trait PreDecrement {
    fn decrement(&mut self) -> &mut Self;
}

macro_rules! impl_step_for {
    ($($t:ty),* $(,)?) => {$(
        impl PreIncrement for $t {
            #[inline(always)]
            fn increment(&mut self) -> &mut Self {
                *self += 1;
                self
            }
        }
        impl PreDecrement for $t {
            #[inline(always)]
            fn decrement(&mut self) -> &mut Self {
                *self -= 1;
                self
            }
        }
    )*};
}

impl_step_for! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_chain() {
        let mut x = 5usize;
        x.increment().increment();
        assert_eq!(x, 7);
        x.decrement();
        assert_eq!(x, 6);
    }
}
