mod link;
mod statistics;
mod support;
mod view;
