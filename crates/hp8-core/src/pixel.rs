/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single RGB pixel and the channels it carries

/// Number of bytes a pixel occupies in a raster
pub const PIXEL_SIZE: usize = 3;

/// A channel of an RGB pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue
}

impl Channel {
    /// All channels, in the order they are laid out in memory
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel inside a packed pixel record
    pub const fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2
        }
    }
}

/// The RGB values of a pixel.
///
/// Pixels have no alpha and are always 8 bits per channel.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b }
    }

    /// Create a pixel with the same value in all three channels
    pub const fn splat(value: u8) -> Pixel {
        Pixel::new(value, value, value)
    }

    pub const fn from_bytes(bytes: [u8; PIXEL_SIZE]) -> Pixel {
        Pixel::new(bytes[0], bytes[1], bytes[2])
    }

    pub const fn to_bytes(self) -> [u8; PIXEL_SIZE] {
        [self.r, self.g, self.b]
    }

    pub const fn get(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b
        }
    }

    pub fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value
        }
    }
}

#[test]
fn test_channel_access() {
    let mut pixel = Pixel::from_bytes([1, 2, 3]);

    for channel in Channel::ALL {
        assert_eq!(pixel.get(channel), pixel.to_bytes()[channel.offset()]);
    }
    pixel.set(Channel::Green, 200);
    assert_eq!(pixel, Pixel::new(1, 200, 3));
}
