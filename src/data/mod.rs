mod blocks;

pub(crate) use blocks::UNICODE_BLOCKS;
