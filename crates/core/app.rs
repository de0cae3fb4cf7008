use shelf::BookRecord;

const HEADINGS: [&str; 5] = ["Id", "Título", "Autor(es)", "Fecha", "Categoría"];

/// Renders the detail view of a single book.
pub fn render_record(book: &BookRecord) -> String {
    let details = format!(
        "{}\nAutor(es): {}\nFecha de publicación: {}\nCategorías: {}",
        book.title(),
        book.authors(),
        book.published_date(),
        book.categories()
    );

    match book.image() {
        Some(image) => format!("[{image}]\n{details}"),
        None => details,
    }
}

/// Renders the saved books as a table, one row per book in insertion order.
pub fn render_table(books: &[BookRecord]) -> String {
    if books.is_empty() {
        return "No hay libros guardados".to_owned();
    }

    let rows: Vec<[String; 5]> = books
        .iter()
        .map(|b| {
            [
                b.id().to_string(),
                b.title().to_owned(),
                b.authors().to_owned(),
                b.published_date().to_owned(),
                b.categories().to_owned(),
            ]
        })
        .collect();

    let mut widths = HEADINGS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, HEADINGS.iter().copied(), &widths);
    for row in &rows {
        out.push('\n');
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::NewBook;

    fn book(title: &str, image: Option<&str>) -> BookRecord {
        BookRecord::from(NewBook {
            title: title.to_owned(),
            authors: "Frank Herbert".to_owned(),
            published_date: "1965".to_owned(),
            categories: "Science Fiction".to_owned(),
            image: image.map(ToOwned::to_owned),
        })
    }

    #[test]
    fn record_without_image_has_no_image_line() {
        let out = render_record(&book("Dune", None));

        assert_eq!(
            "Dune\nAutor(es): Frank Herbert\nFecha de publicación: 1965\nCategorías: Science Fiction",
            out
        );
    }

    #[test]
    fn record_with_image_starts_with_it() {
        let out = render_record(&book("Dune", Some("http://img/dune.png")));

        assert!(out.starts_with("[http://img/dune.png]\nDune\n"));
    }

    #[test]
    fn empty_table_has_notice() {
        assert_eq!("No hay libros guardados", render_table(&[]));
    }

    #[test]
    fn table_rows_follow_insertion_order() {
        let books = vec![book("Dune", None), book("Children of Dune", None)];
        let out = render_table(&books);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(3, lines.len());
        assert!(lines[0].starts_with("Id"));
        assert!(lines[1].starts_with(&books[0].id().to_string()));
        assert!(lines[1].contains("Dune"));
        assert!(lines[2].contains("Children of Dune"));
        // columns line up
        assert_eq!(lines[1].find("Frank"), lines[2].find("Frank"));
    }
}
