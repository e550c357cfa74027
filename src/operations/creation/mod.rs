mod rectangle_loop;

pub use rectangle_loop::RectangleLoop;
