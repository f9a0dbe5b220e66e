//! Address types for the simulated address space.
//!
//! A virtual address decomposes into a page number and an offset within
//! the page; a physical address indexes directly into the byte arena of
//! [`crate::store::PhysicalStore`]. Both are thin `usize` newtypes so the
//! two spaces cannot be mixed up at call sites.

use core::fmt;

/// Default page size: 4KB
pub const PAGE_SIZE: usize = 4096;
/// Page shift (log2 of the default page size)
pub const PAGE_SHIFT: usize = 12;

/// A virtual address as seen by the requester.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VirtAddr(pub usize);

/// An address into the simulated physical byte arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhysAddr(pub usize);

impl VirtAddr {
    /// Page number for a given page size.
    #[inline]
    pub const fn page_number(self, page_size: usize) -> usize {
        self.0 / page_size
    }

    /// Byte offset within the page for a given page size.
    #[inline]
    pub const fn page_offset(self, page_size: usize) -> usize {
        self.0 % page_size
    }
}

impl PhysAddr {
    /// Address of `offset` bytes past this one.
    #[inline]
    pub const fn add_offset(self, offset: usize) -> Self {
        Self(self.0 + offset)
    }
}

impl From<usize> for VirtAddr {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<VirtAddr> for usize {
    fn from(value: VirtAddr) -> Self {
        value.0
    }
}

impl From<usize> for PhysAddr {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<PhysAddr> for usize {
    fn from(value: PhysAddr) -> Self {
        value.0
    }
}

impl fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests: page number is the address divided by the page size
    #[test]
    fn test_page_number() {
        assert_eq!(VirtAddr(0x0000).page_number(PAGE_SIZE), 0);
        assert_eq!(VirtAddr(0x1000).page_number(PAGE_SIZE), 1);
        assert_eq!(VirtAddr(0x1FFF).page_number(PAGE_SIZE), 1);
        assert_eq!(VirtAddr(0x2000).page_number(PAGE_SIZE), 2);
    }

    /// Tests: page offset is the address modulo the page size
    #[test]
    fn test_page_offset() {
        assert_eq!(VirtAddr(0x0000).page_offset(PAGE_SIZE), 0);
        assert_eq!(VirtAddr(0x1000).page_offset(PAGE_SIZE), 0);
        assert_eq!(VirtAddr(0x1ABC).page_offset(PAGE_SIZE), 0xABC);
    }

    /// Tests: decomposition holds for a non-default page size
    #[test]
    fn test_non_default_page_size() {
        let va = VirtAddr(0x345);
        assert_eq!(va.page_number(256), 3);
        assert_eq!(va.page_offset(256), 0x45);
    }

    /// Tests: addresses display as 0x-prefixed lowercase hex
    #[test]
    fn test_display_hex() {
        assert_eq!(format!("{}", PhysAddr(0x1000)), "0x1000");
        assert_eq!(format!("{:x}", VirtAddr(0x2abc)), "2abc");
    }
}
