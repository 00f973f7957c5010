#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl<T> From<(T, T)> for Point
where
    T: Into<i32>,
{
    fn from(value: (T, T)) -> Self {
        Point {
            x: value.0.into(),
            y: value.1.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl<T> From<(T, T)> for Size
where
    T: Into<i32>,
{
    fn from(value: (T, T)) -> Self {
        Size {
            width: value.0.into(),
            height: value.1.into(),
        }
    }
}

impl Size {
    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

// 8 bits per pixel, grayscale, rows packed back to back
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageHeader {
    width: i32,
    height: i32,
}

impl ImageHeader {
    pub fn new(data_len: usize, width: i32, height: i32) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "invalid width {} and height {}",
            width,
            height
        );
        assert!(
            data_len == (width * height) as usize,
            "invalid data len {} for width {} and height {}",
            data_len,
            width,
            height
        );
        ImageHeader { width, height }
    }

    fn offset(&self, x: i32, y: i32) -> usize {
        debug_assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        (y * self.width + x) as usize
    }
}

pub trait HasImageHeader {
    fn header(&self) -> ImageHeader;
}

pub trait ConstImage: HasImageHeader {
    fn data(&self) -> &[u8];

    fn width(&self) -> i32 {
        self.header().width
    }
    fn height(&self) -> i32 {
        self.header().height
    }
    fn size(&self) -> Size {
        (self.width(), self.height()).into()
    }
    fn row(&self, y: i32) -> &[u8] {
        let start = (y * self.width()) as usize;
        &self.data()[start..start + self.width() as usize]
    }
    fn pixel(&self, x: i32, y: i32) -> u8 {
        self.data()[self.header().offset(x, y)]
    }
    fn count_pixels(&self, val: u8) -> usize {
        self.data().iter().filter(|&&v| v == val).count()
    }
}

pub trait Image: ConstImage {
    fn mut_data(&mut self) -> &mut [u8];

    fn mut_row(&mut self, y: i32) -> &mut [u8] {
        let start = (y * self.width()) as usize;
        let width = self.width() as usize;
        &mut self.mut_data()[start..start + width]
    }
    fn fill(&mut self, val: u8) {
        self.mut_data().fill(val);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer {
    data: Vec<u8>,
    header: ImageHeader,
}

impl ImageBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let data = vec![0; (width.max(0) * height.max(0)) as usize];
        let header = ImageHeader::new(data.len(), width, height);
        Self { data, header }
    }

    pub fn from_vec(data: Vec<u8>, width: i32, height: i32) -> Self {
        let header = ImageHeader::new(data.len(), width, height);
        Self { data, header }
    }

    pub fn from_fn(width: i32, height: i32, f: impl Fn(i32, i32) -> u8) -> Self {
        let mut buf = Self::new(width, height);
        for y in 0..height {
            for (x, v) in buf.mut_row(y).iter_mut().enumerate() {
                *v = f(x as i32, y);
            }
        }
        buf
    }
}

impl HasImageHeader for ImageBuffer {
    fn header(&self) -> ImageHeader {
        self.header
    }
}

impl ConstImage for ImageBuffer {
    fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl Image for ImageBuffer {
    fn mut_data(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }
}


pub mod convert;
