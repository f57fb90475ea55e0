mod application;
mod case;
mod reference;
