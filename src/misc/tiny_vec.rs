use std::{fmt::Debug, hash::Hash, mem::MaybeUninit, ops::Deref};

/// Fixed capacity vector stored inline. Used for the handful of dice and steps
/// a turn can hold, so copying a value never allocates.
#[derive(Clone, Copy)]
pub struct TinyVec<T, const N: usize>
where
    T: Copy,
{
    buf: [MaybeUninit<T>; N],
    len: u8,
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy
{
    pub const fn new() -> Self {
        const { assert!(N <= 255, "TinyVec supports up to 255 elements") }
        TinyVec { buf: [const { MaybeUninit::uninit() }; N], len: 0 }
    }

    pub fn push(&mut self, val: T) {
        assert!((self.len as usize) < N, "TinyVec is full");
        self.buf[self.len as usize].write(val);
        self.len += 1;
    }
}

impl<T: Copy, const N: usize> Deref for TinyVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Only the first `self.len` elements are initialized
        unsafe {
            std::slice::from_raw_parts(self.buf.as_ptr() as *const T, self.len as usize)
        }
    }
}

impl<T: Copy, const N: usize> Default for TinyVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> FromIterator<T> for TinyVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        for val in iter {
            vec.push(val);
        }
        vec
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for TinyVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Copy + Eq, const N: usize> Eq for TinyVec<T, N> {}

impl<T: Copy + Hash, const N: usize> Hash for TinyVec<T, N> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Copy + Debug, const N: usize> Debug for TinyVec<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push() {
        let mut vec: TinyVec<u8, 2> = TinyVec::new();
        assert!(vec.is_empty());
        vec.push(3);
        vec.push(5);
        assert_eq!(&*vec, &[3, 5]);
        assert_eq!(vec.len(), 2);
    }

    #[test]
    #[should_panic]
    fn test_push_past_capacity_panics() {
        let mut vec: TinyVec<u8, 1> = TinyVec::new();
        vec.push(1);
        vec.push(2);
    }

    #[test]
    fn test_equality_ignores_unused_slots() {
        let a: TinyVec<u8, 4> = [1, 2].into_iter().collect();
        let mut b: TinyVec<u8, 4> = TinyVec::new();
        b.push(1);
        b.push(2);
        assert_eq!(a, b);
        let c: TinyVec<u8, 4> = [1, 2, 9].into_iter().collect();
        assert_ne!(a, c);
        assert_eq!(format!("{:?}", a), "[1, 2]");
    }
}
