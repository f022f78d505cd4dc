use blurlock::blur::{box_blur, box_blur_h, box_blur_once, box_blur_with};
use blurlock::parallel::Sequential;
use blurlock::pixel::{channels, rgb};
use blurlock::{Frame, scale};

fn texture(height: usize, width: usize) -> Vec<u32> {
    (0..height * width)
        .map(|i| {
            let (y, x) = (i / width, i % width);
            let v = (((x * 31 + y * 17) % 7) * 36) as u8;
            rgb(v, v / 2, 255 - v)
        })
        .collect()
}

fn red_variance(data: &[u32], width: usize, cx: usize, cy: usize, k: usize) -> f64 {
    let values: Vec<f64> = (cy - k..=cy + k)
        .flat_map(|y| (cx - k..=cx + k).map(move |x| (y, x)))
        .map(|(y, x)| f64::from(channels(data[y * width + x])[0]))
        .collect();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

fn blurred(src: &[u32], height: usize, width: usize, radius: usize, times: usize) -> Vec<u32> {
    let mut src = src.to_vec();
    let mut dest = vec![0; src.len()];
    box_blur(&mut dest, &mut src, height, width, radius, times).unwrap();
    dest
}

#[test]
fn edge_truncation_row() {
    let src: Vec<u32> = [0, 0, 0, 255, 0].iter().map(|&r| rgb(r, 0, 0)).collect();
    let mut dest = vec![0; 5];
    box_blur_h(&Sequential, &mut dest, &src, 1, 5, 1);
    let red: Vec<u32> = dest.iter().map(|&p| channels(p)[0]).collect();
    assert_eq!(red, vec![0, 0, 85, 85, 85]);
}

#[test]
fn uniform_interior_is_unchanged() {
    let (height, width, radius) = (20, 30, 3);
    let color = rgb(120, 60, 200);
    let out = blurred(&vec![color; height * width], height, width, radius, 1);

    for y in radius..height - radius {
        for x in radius..width - radius {
            assert_eq!(out[y * width + x], color, "({x}, {y})");
        }
    }
    // углы темнеют: в окно попадает только (r+1)² из (2r+1)² отсчётов
    assert!(channels(out[0])[0] < 120);
}

#[test]
fn uniform_interior_survives_many_passes() {
    let (height, width, radius, times) = (40, 40, 2, 3);
    let color = rgb(10, 200, 90);
    let out = blurred(&vec![color; height * width], height, width, radius, times);
    let margin = radius * times;
    for y in margin..height - margin {
        for x in margin..width - margin {
            assert_eq!(out[y * width + x], color);
        }
    }
}

#[test]
fn zero_radius_keeps_every_pixel() {
    let (height, width) = (6, 9);
    let src = texture(height, width);
    for times in [1, 2, 5] {
        assert_eq!(blurred(&src, height, width, 0, times), src);
    }
}

#[test]
fn more_passes_smooth_more() {
    let (height, width, radius) = (41, 41, 2);
    let src = texture(height, width);
    let mut previous = red_variance(&src, width, 20, 20, 5);
    for times in 1..=4 {
        let out = blurred(&src, height, width, radius, times);
        let variance = red_variance(&out, width, 20, 20, 5);
        assert!(
            variance <= previous,
            "times = {times}: {variance} > {previous}"
        );
        previous = variance;
    }
}

#[test]
fn destination_holds_result_for_odd_and_even_passes() {
    let (height, width, radius) = (12, 15, 2);
    let src = texture(height, width);

    let mut expected = src.clone();
    let mut scratch = vec![0; src.len()];
    for times in 1..=3 {
        let mut next = vec![0; src.len()];
        box_blur_once(&Sequential, &mut next, &expected, &mut scratch, height, width, radius);
        expected = next;

        let mut input = src.clone();
        let mut dest = vec![u32::MAX; src.len()];
        box_blur_with(&Sequential, &mut dest, &mut input, height, width, radius, times).unwrap();
        assert_eq!(dest, expected, "times = {times}");
    }
}

#[cfg(feature = "parallel")]
#[test]
fn rayon_matches_sequential() {
    use blurlock::parallel::Rayon;

    let (height, width) = (33, 47);
    let src = texture(height, width);
    let run = |parallel: bool| {
        let mut input = src.clone();
        let mut dest = vec![0; src.len()];
        if parallel {
            box_blur_with(&Rayon, &mut dest, &mut input, height, width, 4, 3).unwrap();
        } else {
            box_blur_with(&Sequential, &mut dest, &mut input, height, width, 4, 3).unwrap();
        }
        dest
    };
    assert_eq!(run(true), run(false));
}

#[test]
fn shape_is_preserved() {
    for (height, width, radius, times) in [(1, 1, 1, 1), (3, 17, 5, 2), (16, 2, 1, 3)] {
        let out = blurred(&texture(height, width), height, width, radius, times);
        assert_eq!(out.len(), height * width);
        assert!(out.iter().all(|&p| p >> 24 == 0));
    }
}

#[test]
fn scaled_pipeline_restores_screen_size() {
    let (width, height) = (64u32, 36u32);
    let screen = Frame::from_raw(width, height, texture(height as usize, width as usize)).unwrap();

    let mut small = scale::downsample(&screen, 4).unwrap();
    assert_eq!((small.width, small.height), (16, 9));
    small.blur(2, 2).unwrap();
    let big = scale::upscale(&small, 4).unwrap();

    assert_eq!((big.width, big.height), (width, height));
    assert_eq!(big.to_native_bytes().len(), (width * height * 4) as usize);
    assert_eq!(big.get(3, 3), small.get(0, 0));
}
