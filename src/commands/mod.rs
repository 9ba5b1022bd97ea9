pub mod rankings;
