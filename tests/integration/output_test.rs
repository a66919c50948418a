//! Integration tests for the public writing API

use std::io;

use colorized::{
    cwrite, prefix, reset, sequence, write, write_pair, write_requests, Background, ColorPair,
    Foreground, Paint, Palette, Request, Rgb, Style,
};

fn capture(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).expect("write to Vec cannot fail");
    String::from_utf8(buf).expect("escape sequences are ASCII")
}

#[test]
fn every_named_pair_and_style_empty_payload() {
    for style in Style::ALL {
        for fg in Foreground::ALL {
            for bg in Background::ALL {
                let out = capture(|buf| write(style, fg, bg, buf, ""));
                let expected = format!(
                    "\x1b[0m\x1b[{s};{b}m\x1b[{s};{f}m",
                    s = style.code(),
                    b = bg.code(),
                    f = fg.code()
                );
                assert_eq!(out, expected);
            }
        }
    }
}

#[test]
fn bold_red_on_white_truecolor() {
    let out = capture(|buf| {
        write(
            Style::Bold,
            Rgb::new(255, 0, 0),
            Rgb::new(255, 255, 255),
            buf,
            "x",
        )
    });
    assert_eq!(
        out,
        "\x1b[0m\x1b[1;49m\x1b[48;2;255;255;255m\x1b[38;2;255;0;0mx"
    );
}

#[test]
fn every_palette_pair_of_indices() {
    for i in Palette::all() {
        for j in [Palette(0), Palette(15), Palette(16), Palette(231), Palette(255)] {
            let out = capture(|buf| write(Style::Standard, i, j, buf, "x"));
            assert_eq!(
                out,
                format!(
                    "\x1b[0m\x1b[0;49m\x1b[48;5;{}m\x1b[38;5;{}mx",
                    j.index(),
                    i.index()
                )
            );
        }
    }
}

#[test]
fn reset_is_exact_and_repeatable() {
    assert_eq!(capture(|buf| reset(buf)), "\x1b[0m");
    assert_eq!(
        capture(|buf| {
            reset(buf)?;
            reset(buf)
        }),
        "\x1b[0m\x1b[0m"
    );
}

#[test]
fn formatted_write_uses_plain_prefix() {
    let out = capture(|buf| {
        cwrite!(
            buf,
            Style::Bold,
            Foreground::BrightBlue,
            Background::Default,
            "Hello world: {}\n",
            3
        )
    });
    let expected_prefix = prefix(Style::Bold, (Foreground::BrightBlue, Background::Default));
    assert_eq!(out, format!("{expected_prefix}Hello world: 3\n"));
}

#[test]
fn prefix_is_reset_plus_sequence() {
    let colors = ColorPair::from((Palette::ORANGE1, Palette::GREY0));
    assert_eq!(
        prefix(Style::Blink, colors),
        format!("\x1b[0m{}", sequence(Style::Blink, colors))
    );
}

#[test]
fn write_pair_matches_write() {
    let a = capture(|buf| write(Style::Dim, Foreground::Cyan, Background::Blue, buf, "z"));
    let b = capture(|buf| {
        write_pair(
            Style::Dim,
            ColorPair::from((Foreground::Cyan, Background::Blue)),
            buf,
            "z",
        )
    });
    assert_eq!(a, b);
}

#[test]
fn painted_display_matches_write() {
    let written = capture(|buf| write(Style::Italic, Rgb::new(9, 8, 7), Rgb::new(1, 2, 3), buf, &42_i32));
    let painted = 42_i32.paint(Style::Italic, Rgb::new(9, 8, 7), Rgb::new(1, 2, 3)).to_string();
    assert_eq!(written, painted);
}

#[test]
fn requests_write_to_separate_sinks_in_order() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    write_requests([
        Request::new(Style::Bold, Foreground::BrightRed, Background::Default, &mut first, "one"),
        Request::formatted(
            Style::Bold,
            Palette(1),
            Palette(2),
            &mut second,
            format_args!("two {}", 2),
        ),
    ])
    .unwrap();

    assert_eq!(first, b"\x1b[0m\x1b[1;49m\x1b[1;91mone");
    assert_eq!(second, b"\x1b[0m\x1b[1;49m\x1b[48;5;2m\x1b[38;5;1mtwo 2");
}
