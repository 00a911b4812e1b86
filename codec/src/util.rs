//! Helpers shared by the codec implementations.

use crate::Error;
use bytes::Buf;

/// Checks that at least `len` bytes remain in the buffer, without consuming any of them.
#[inline]
pub fn at_least<B: Buf>(buf: &mut B, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::OutOfBounds);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least() {
        let mut buf: &[u8] = &[1, 2, 3];
        assert!(at_least(&mut buf, 0).is_ok());
        assert!(at_least(&mut buf, 3).is_ok());
        assert_eq!(at_least(&mut buf, 4), Err(Error::OutOfBounds));
        assert_eq!(buf.len(), 3);
    }
}
