use super::Key;

impl Key for str {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.bytes()
    }
}

impl Key for String {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.bytes()
    }
}

impl Key for [u8] {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.iter().copied()
    }
}

impl Key for Vec<u8> {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.iter().copied()
    }
}

impl<const N: usize> Key for [u8; N] {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.iter().copied()
    }
}

impl<K> Key for &K
where
    K: Key + ?Sized,
{
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        K::as_bytes(*self)
    }
}
