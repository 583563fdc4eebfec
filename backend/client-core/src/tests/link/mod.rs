mod encoding;
mod normalize;
mod options;
mod source;
