pub mod auto_carousel;
pub mod carousel;
pub mod heartbeat;
pub mod lightbox;
