use streetdivider::StreetDivider;

fn main() {
    let divider = StreetDivider::new();

    println!("=== streetdivider demo ===\n");

    let test_cases = vec![
        // streets carrying a number
        "Bundesstraße 1 25 1/3",
        "Bundesstraße 2 Nr. 25a",
        "Straße 73 5a",
        "Straße des 17. Juni 135",
        // Mannheim squares
        "D 4, 3",
        "D4, Nr. 3",
        "B 4 10–10a",
        "B45",
        // ordinary streets
        "Gartenstr. 25",
        "Allertshäuser Straße 25a",
        "Heideweg 32 - 5",
        "Kerberweg 25-1/3",
        "Hellersbergstr. 34 am 3. Schafott",
        // numeric street names
        "1 Maja 34 a-d",
        // no house number
        "Gartenstr. a",
        "",
    ];

    for input in test_cases {
        let location = divider.parse(input);
        println!("input:        \"{}\"", input);
        println!("  street:       \"{}\"", location.street());
        println!(
            "  house number: {}",
            location
                .house_number()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
        println!("  affix:        {}", location.affix().unwrap_or("-"));
        println!();
    }
}
