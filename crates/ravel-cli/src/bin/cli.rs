use std::fmt::Display;
use std::io::{BufRead, Read};

use clap::Parser;
use ravel::prelude::*;

#[derive(Parser, Debug)]
#[clap(name = "ravel", about = "Demonstrations of lazy view composition")]
struct Opts {
    /// Read integers from stdin in the stream section.
    #[clap(short, long)]
    interactive: bool,

    /// Render tensor cells with ANSI colors.
    #[clap(long)]
    color: bool,
}

fn render<V>(view: &V) -> String
where
    V: View,
    V::Item: Display,
{
    let cells: Vec<String> = view.iter().map(|x| x.to_string()).collect();
    format!("[{}]", cells.join(","))
}

fn render2<V>(view: &V) -> String
where
    V: View,
    V::Item: View,
    <V::Item as View>::Item: Display,
{
    let rows: Vec<String> = view.iter().map(|row| render(&row)).collect();
    format!("[{}]", rows.join(","))
}

fn print2d<V>(view: &V)
where
    V: View,
    V::Item: View,
    <V::Item as View>::Item: Display,
{
    for row in view.iter() {
        println!("{}", render(&row));
    }
    println!();
}

fn initial_examples() {
    println!("------------- Initial examples -------------");
    let data: Vec<i32> = (1..=5).collect();
    let x = SliceView::new(&data);
    println!("{}", render(&x));
    println!("{}", render(&x.skip(2)));
    println!("{}", render(&x.step_by(2)));
    println!("{}", render(&x.map(|v| 2 * v)));
    print2d(&x.chunks(2));
    println!("{}", render(&x.chunks(2).join()));

    let y = vec![1, 2, 3, 4];
    println!("{}", inner_product(&x, &SliceView::from(&y), 0));
    println!("{}", y.len());
    println!();
}

fn matrix_transpose() -> anyhow::Result<()> {
    println!("------------- Matrix transpose -------------");
    let data: Vec<i32> = (1..=5).collect();
    let x = SliceView::new(&data);

    let wdata: Vec<i32> = (1..=10).collect();
    let w = SliceView::new(&wdata).chunks(5);
    println!("{}", render(&w.map(|row| inner_product(&row, &x, 0))));

    let mdata: Vec<i32> = (1..=6).collect();
    let m = SliceView::new(&mdata).chunks(2);
    // Columns by hand: concatenate the rows, shift the ith column's
    // first element to the front, then take every 2nd element.
    for i in 0..2 {
        println!("{}", render(&m.clone().flatten().skip(i).step_by(2)));
    }
    // Same columns via the combinator.
    print2d(&transpose(m)?);
    Ok(())
}

fn matrix_product() -> anyhow::Result<()> {
    println!("------------- Matrix product -------------");
    let xdata: Vec<i32> = (1..=6).collect();
    let x = SliceView::new(&xdata).chunks(3);
    let wdata: Vec<i32> = (1..=6).collect();
    let wt = transpose(SliceView::new(&wdata).chunks(2))?;
    for row in x.iter() {
        let products = wt.clone().map(|column| inner_product(&row, &column, 0));
        println!("{}", render(&products));
    }
    println!();
    Ok(())
}

fn stream_section() -> anyhow::Result<()> {
    println!("------------- Integer stream -------------");
    println!("Enter integers until you get bored. Then enter something else to exit the loop.");
    let stdin = std::io::stdin();
    let mut lock = stdin.lock();

    let mut count = 0usize;
    'first: for line in lock.by_ref().lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if token.parse::<i64>().is_err() {
                break 'first;
            }
            count += 1;
        }
    }
    println!("integers read: {count}");

    println!("Do it again.");
    'second: for line in lock.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            match token.parse::<i64>() {
                Ok(value) => println!("In loop:{value}"),
                Err(_) => break 'second,
            }
        }
    }
    Ok(())
}

/// Pure function of the index; colors cycle red, green, blue like a
/// channel index.
fn format_cell(i: usize, color: bool) -> String {
    if color {
        let code = 31 + if i % 3 == 2 { 3 } else { i % 3 };
        format!("\x1b[1;{code}m{i:<3}\x1b[0m")
    } else {
        format!("{i:<3}")
    }
}

fn tensor_section(color: bool) -> anyhow::Result<()> {
    println!("------------- 4d 'transpose' -------------");
    const BATCH: usize = 2;
    const HEIGHT: usize = 4;
    const WIDTH: usize = 5;
    const DEPTH: usize = 3;
    let cells: Vec<String> = (0..BATCH * HEIGHT * WIDTH * DEPTH)
        .map(|i| format_cell(i, color))
        .collect();
    let t = SliceView::new(&cells)
        .chunks(DEPTH)
        .chunks(WIDTH)
        .chunks(HEIGHT);
    let transposed = transpose4d(t.clone())?;
    log::info!(
        "tensor shape {:?}, strides {:?}",
        transposed.src_shape(),
        transposed.src_strides()
    );

    println!("A representation of a batch {BATCH} of rgb images.");
    for image in t.iter() {
        for row in image.iter() {
            println!("{}", render2(&row));
        }
        println!();
    }

    println!(
        "And it's 'transpose', {:?} -> {:?}.",
        transposed.src_shape(),
        transposed.shape()
    );
    for slice in transposed.iter() {
        for row in slice.iter() {
            println!("{}", render2(&row));
        }
        println!();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    initial_examples();
    matrix_transpose()?;
    matrix_product()?;
    if opts.interactive {
        stream_section()?;
    }
    tensor_section(opts.color)?;
    Ok(())
}
