mod view;

pub use view::Footer;
