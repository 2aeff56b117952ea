pub mod block;
pub mod props;
