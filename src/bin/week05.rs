//! Generates the week 5 handout: network layer addressing, subnetting
//! and VLSM.
use catedra::{
    Alignment, Cell, Document, NumberingDefinition, NumberingRegistry, Package, Paragraph, Row,
    Run, SectionProperties, Style, StyleRegistry, Table, TableBorder,
};

const OUTPUT_PATH: &str = "Curs5_Seminar5_Laborator5.docx";

const PRIMARY: &str = "1B4F72";
const SECONDARY: &str = "2874A6";
const TEXT: &str = "2C3E50";
const MUTED: &str = "7B7D7D";
const LIGHT_BG: &str = "EBF5FB";
const WARNING_BG: &str = "FDEDEC";
const TABLE_BORDER_COLOR: &str = "BDC3C7";

fn main() {
    if let Err(err) = run() {
        eprintln!("eroare la generarea documentului: {err}");
        std::process::exit(1);
    }
}

fn run() -> catedra::Result<()> {
    Package::save(&build_document(), OUTPUT_PATH)?;
    println!("document generat: {OUTPUT_PATH}");
    Ok(())
}

fn p(text: &str) -> Paragraph {
    Paragraph::new().run(Run::text(text))
}

/// Paragraph opening with a bold lead-in, followed by plain text.
fn lead(label: &str, rest: &str) -> Paragraph {
    Paragraph::new()
        .run(Run::text(label).bold())
        .run(Run::text(rest))
}

/// Paragraph opening with an italic lead-in.
fn ilead(label: &str, rest: &str) -> Paragraph {
    Paragraph::new()
        .run(Run::text(label).italic())
        .run(Run::text(rest))
}

fn h1(text: &str) -> Paragraph {
    Paragraph::styled("Heading1").run(Run::text(text))
}

fn h2(text: &str) -> Paragraph {
    Paragraph::styled("Heading2").run(Run::text(text))
}

fn h3(text: &str) -> Paragraph {
    Paragraph::styled("Heading3").run(Run::text(text))
}

fn code(text: &str) -> Paragraph {
    Paragraph::styled("CodeBlock").run(Run::text(text))
}

fn bullet(text: &str) -> Paragraph {
    Paragraph::new().numbered("bullet-list").run(Run::text(text))
}

fn bullet_lead(label: &str, rest: &str) -> Paragraph {
    Paragraph::new()
        .numbered("bullet-list")
        .run(Run::text(label).bold())
        .run(Run::text(rest))
}

fn item(reference: &str, text: &str) -> Paragraph {
    Paragraph::new().numbered(reference).run(Run::text(text))
}

fn item_lead(reference: &str, label: &str, rest: &str) -> Paragraph {
    Paragraph::new()
        .numbered(reference)
        .run(Run::text(label).bold())
        .run(Run::text(rest))
}

fn note(label: &str, rest: &str) -> Paragraph {
    Paragraph::styled("InstructorNote")
        .run(Run::text(label).bold())
        .run(Run::text(rest))
}

fn spacer(before: u32) -> Paragraph {
    Paragraph::new().space_before(before)
}

fn cell(text: &str) -> Cell {
    Cell::new().paragraph(p(text))
}

fn centered_cell(text: &str) -> Cell {
    Cell::new().paragraph(p(text).align(Alignment::Center))
}

fn header_cell(text: &str, fill: &str) -> Cell {
    Cell::new()
        .shading(fill)
        .paragraph(Paragraph::new().run(Run::text(text).bold()))
}

fn centered_header_cell(text: &str, fill: &str) -> Cell {
    Cell::new().shading(fill).paragraph(
        Paragraph::new()
            .align(Alignment::Center)
            .run(Run::text(text).bold()),
    )
}

fn bordered(widths: Vec<u32>) -> Table {
    Table::new(widths).border(TableBorder::new(1, TABLE_BORDER_COLOR))
}

fn styles() -> StyleRegistry {
    let mut styles = StyleRegistry::with_defaults("Calibri", 22);
    styles.register(
        Style::new("Title", "Title")
            .font("Calibri Light")
            .size(56)
            .bold()
            .color(PRIMARY)
            .space_before(120)
            .space_after(240)
            .align(Alignment::Center),
    );
    styles.register(
        Style::new("Heading1", "Heading 1")
            .font("Calibri Light")
            .size(32)
            .bold()
            .color(PRIMARY)
            .space_before(360)
            .space_after(120)
            .outline_level(0),
    );
    styles.register(
        Style::new("Heading2", "Heading 2")
            .size(26)
            .bold()
            .color(SECONDARY)
            .space_before(240)
            .space_after(80)
            .outline_level(1),
    );
    styles.register(
        Style::new("Heading3", "Heading 3")
            .size(24)
            .bold()
            .color(TEXT)
            .space_before(200)
            .space_after(60)
            .outline_level(2),
    );
    styles.register(
        Style::new("InstructorNote", "Instructor Note")
            .size(20)
            .italic()
            .color(MUTED)
            .space_before(60)
            .space_after(60)
            .indent_left(360),
    );
    styles.register(
        Style::new("CodeBlock", "Code Block")
            .font("Consolas")
            .size(18)
            .color("2E4053")
            .space_before(80)
            .space_after(80),
    );
    styles
}

fn numbering() -> NumberingRegistry {
    let mut numbering = NumberingRegistry::new();
    numbering.register(NumberingDefinition::bullet("bullet-list"));
    for name in [
        "numbered-1",
        "numbered-2",
        "numbered-3",
        "numbered-4",
        "numbered-5",
        "numbered-6",
    ] {
        numbering.register(NumberingDefinition::decimal(name));
    }
    numbering
}

fn build_document() -> Document {
    let mut doc = Document::new(styles(), numbering());
    doc.set_section(SectionProperties::a4().margins(1080, 1080, 1080, 1080));
    doc.set_title("Nivelul Rețea: Adresare IPv4/IPv6, Subnetting, VLSM");
    doc.set_creator("ASE CSIE — Informatică Economică");

    doc.set_header(vec![Paragraph::new().align(Alignment::Right).run(
        Run::text("Rețele de Calculatoare — Săptămâna 5")
            .size(18)
            .color(MUTED),
    )]);
    doc.set_footer(vec![
        Paragraph::new()
            .align(Alignment::Center)
            .run(Run::text("Pagina ").size(18))
            .run(Run::page_number().size(18))
            .run(Run::text(" din ").size(18))
            .run(Run::page_count().size(18))
            .run(Run::text(" | ASE CSIE — Informatică Economică").size(18).color(MUTED)),
    ]);

    cover_page(&mut doc);
    section_goals(&mut doc);
    section_prerequisites(&mut doc);
    section_lecture(&mut doc);
    section_seminar(&mut doc);
    section_lab(&mut doc);
    section_debugging(&mut doc);
    section_exercises(&mut doc);
    section_reflection(&mut doc);
    section_project(&mut doc);
    section_bibliography(&mut doc);

    doc
}

fn cover_page(doc: &mut Document) {
    doc.add_paragraph(spacer(2400));
    doc.add_paragraph(Paragraph::styled("Title").run(Run::text("REȚELE DE CALCULATOARE")));
    doc.add_paragraph(
        Paragraph::new()
            .align(Alignment::Center)
            .space_before(240)
            .run(
                Run::text("Cursul 5 | Seminar 5 | Laborator 5")
                    .size(32)
                    .color(SECONDARY),
            ),
    );
    doc.add_paragraph(spacer(480));
    doc.add_paragraph(Paragraph::new().align(Alignment::Center).run(
        Run::text("Nivelul Rețea: Adresare IPv4/IPv6, Subnetting, VLSM")
            .size(28)
            .bold()
            .color(TEXT),
    ));
    doc.add_paragraph(spacer(960));
    for text in [
        "Anul universitar 2024–2025, Semestrul 2",
        "Academia de Studii Economice București",
        "Facultatea de Cibernetică, Statistică și Informatică Economică",
    ] {
        doc.add_paragraph(
            Paragraph::new()
                .align(Alignment::Center)
                .run(Run::text(text).size(22).color(MUTED)),
        );
    }
    doc.add_paragraph(spacer(1440));
    doc.add_paragraph(Paragraph::new().align(Alignment::Center).run(
        Run::text("📘 Notițe pentru cadre didactice și studenți")
            .size(20)
            .italic()
            .color(MUTED),
    ));
}

fn section_goals(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("1. Scopul Săptămânii"));

    doc.add_paragraph(h2("Ce vom învăța"));
    doc.add_paragraph(p(
        "Această săptămână marchează tranziția de la nivelurile inferioare ale stivei TCP/IP \
         către nivelul care asigură conectivitatea globală: nivelul rețea. Vom explora \
         mecanismele prin care pachetele de date pot traversa granițele rețelelor locale și \
         ajunge la destinații aflate oriunde pe Internet.",
    ));
    doc.add_paragraph(spacer(120));
    for text in [
        "Structura adreselor IPv4 și IPv6: format, clase istorice, notație CIDR",
        "Calculul parametrilor rețelei: adresă de rețea, broadcast, interval de gazde valide",
        "Tehnici de partiționare: FLSM (subrețele egale) și VLSM (alocare optimizată)",
        "Header-ul IPv4 vs IPv6: câmpuri esențiale și diferențe arhitecturale",
        "Simularea rutării într-un mediu virtual (Mininet): configurare, verificare, debugging",
    ] {
        doc.add_paragraph(bullet(text));
    }

    doc.add_paragraph(h2("De ce contează"));
    doc.add_paragraph(p(
        "Adresarea IP reprezintă fundația oricărei comunicații pe Internet. Un programator \
         care stăpânește aceste concepte poate:",
    ));
    doc.add_paragraph(item_lead(
        "numbered-1",
        "Diagnostica probleme de conectivitate ",
        "— înțelegerea subnetting-ului ajută la identificarea rapidă a problemelor de rutare \
         sau izolare a traficului",
    ));
    doc.add_paragraph(item_lead(
        "numbered-1",
        "Proiecta infrastructuri scalabile ",
        "— planificarea corectă a spațiului de adrese previne epuizarea și conflictele",
    ));
    doc.add_paragraph(item_lead(
        "numbered-1",
        "Automatiza deployment-uri cloud ",
        "— VPC-urile AWS, Azure, GCP necesită configurarea explicită a CIDR-urilor",
    ));
    doc.add_paragraph(item_lead(
        "numbered-1",
        "Securiza aplicațiile ",
        "— segmentarea rețelei prin subrețele izolate reduce suprafața de atac",
    ));

    doc.add_paragraph(
        note(
            "💡 Notă pentru cadru didactic: ",
            "Subliniați conexiunea cu realitatea profesională — studenții vor întâlni aceste \
             concepte la interviuri tehnice și în primele săptămâni de lucru. Pregătiți 2-3 \
             exemple concrete din proiecte reale (e.g., configurarea unui VPC în AWS, debugging \
             CIDR mismatch).",
        )
        .space_before(200),
    );
}

fn section_prerequisites(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("2. Prerechizite și Recapitulare"));

    doc.add_paragraph(h2("Din săptămânile anterioare"));
    doc.add_table(
        bordered(vec![2500, 6500])
            .row(
                Row::new()
                    .cell(header_cell("Săptămâna", LIGHT_BG))
                    .cell(header_cell("Concepte relevante pentru S5", LIGHT_BG)),
            )
            .row(
                Row::new()
                    .cell(cell("S1–S2"))
                    .cell(cell("Modelele OSI și TCP/IP, încapsulare, PDU-uri")),
            )
            .row(
                Row::new()
                    .cell(cell("S3"))
                    .cell(cell("Programare socket: structuri sockaddr, AF_INET, bind()")),
            )
            .row(
                Row::new()
                    .cell(cell("S4"))
                    .cell(cell("Nivelul legătură de date: cadre Ethernet, adrese MAC")),
            ),
    );

    doc.add_paragraph(h2("Recapitulare expresă: operații pe biți").space_before(360));
    doc.add_paragraph(p(
        "Calculele CIDR se bazează pe operații pe biți. Asigurați-vă că stăpâniți:",
    ));
    doc.add_paragraph(bullet_lead("AND (&): ", "extrage partea de rețea (IP & Mask = Network)"));
    doc.add_paragraph(bullet_lead(
        "OR (|): ",
        "calculează broadcast-ul (Network | Wildcard = Broadcast)",
    ));
    doc.add_paragraph(bullet_lead("NOT (~): ", "inversează masca pentru a obține wildcard mask"));

    doc.add_paragraph(h3("Tabel de conversie rapidă").space_before(240));
    let mut table = bordered(vec![1500, 2500, 2500, 2500]).row(
        Row::new()
            .cell(centered_header_cell("Zecimal", LIGHT_BG))
            .cell(centered_header_cell("Binar", LIGHT_BG))
            .cell(centered_header_cell("Ca mască", LIGHT_BG))
            .cell(centered_header_cell("Prefix", LIGHT_BG)),
    );
    let conversions: [[&str; 4]; 4] = [
        ["255", "11111111", "8 biți rețea", "/8 per octet"],
        ["128", "10000000", "1 bit rețea", "Împarte în 2"],
        ["192", "11000000", "2 biți rețea", "Împarte în 4"],
        ["240", "11110000", "4 biți rețea", "Împarte în 16"],
    ];
    for cells in conversions {
        let mut row = Row::new();
        for text in cells {
            row = row.cell(centered_cell(text));
        }
        table = table.row(row);
    }
    doc.add_table(table);

    doc.add_paragraph(
        note(
            "⏱️ Timing: ",
            "Alocați maxim 10 minute pentru recapitulare. Dacă studenții au dificultăți cu \
             conversiile, recomandați exerciții suplimentare acasă și continuați cu materia.",
        )
        .space_before(240),
    );
}

fn section_lecture(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("3. Curs: Nivelul Rețea"));

    doc.add_paragraph(h2("3.1 Rolul nivelului rețea"));
    doc.add_paragraph(p("Nivelul rețea (Layer 3) asigură două funcții fundamentale:"));
    doc.add_paragraph(item_lead(
        "numbered-2",
        "Adresarea logică ",
        "— identificarea unică a fiecărui dispozitiv conectat la rețea prin adrese IP",
    ));
    doc.add_paragraph(item_lead(
        "numbered-2",
        "Rutarea ",
        "— determinarea căii optime pentru transmiterea pachetelor între rețele diferite",
    ));
    doc.add_paragraph(
        ilead(
            "Analogie: ",
            "Daca adresa MAC este numarul de serie al unui telefon, adresa IP este numarul de \
             telefon - poate fi schimbat, portat intre operatori si permite rutare ierarhica \
             (prefix tara, prefix oras, numar local).",
        )
        .space_before(160),
    );

    doc.add_paragraph(h2("3.2 Structura adreselor IPv4"));
    doc.add_paragraph(p(
        "O adresă IPv4 constă din 32 de biți, reprezentați în format \"dotted-decimal\" — \
         patru numere zecimale (0–255) separate prin puncte.",
    ));
    doc.add_paragraph(
        code("Exemplu: 192.168.1.10 = 11000000.10101000.00000001.00001010").space_before(120),
    );

    doc.add_paragraph(h3("Adrese speciale"));
    let mut table = bordered(vec![2500, 4500, 2000]).row(
        Row::new()
            .cell(header_cell("Interval", LIGHT_BG))
            .cell(header_cell("Scop", LIGHT_BG))
            .cell(header_cell("RFC", LIGHT_BG)),
    );
    let special: [[&str; 3]; 5] = [
        ["10.0.0.0/8", "Adrese private (rețele mari)", "RFC 1918"],
        ["172.16.0.0/12", "Adrese private (rețele medii)", "RFC 1918"],
        ["192.168.0.0/16", "Adrese private (rețele mici)", "RFC 1918"],
        ["127.0.0.0/8", "Loopback (localhost)", "RFC 1122"],
        ["169.254.0.0/16", "Link-local (APIPA)", "RFC 3927"],
    ];
    for cells in special {
        let mut row = Row::new();
        for text in cells {
            row = row.cell(cell(text));
        }
        table = table.row(row);
    }
    doc.add_table(table);

    doc.add_paragraph(h2("3.3 CIDR și Subnetting"));
    doc.add_paragraph(p(
        "CIDR (Classless Inter-Domain Routing) a înlocuit sistemul claselor, permițând prefixe \
         de lungime variabilă.",
    ));
    doc.add_paragraph(h3("Formule esențiale"));
    for text in [
        "Total adrese = 2^(32 - prefix)",
        "Hosturi valizi = 2^(32 - prefix) - 2",
        "Network address = IP AND subnet_mask",
        "Broadcast = IP OR wildcard_mask",
    ] {
        doc.add_paragraph(code(text));
    }

    doc.add_paragraph(h3("Exemplu rezolvat"));
    doc.add_paragraph(lead("Problemă: ", "Analizați 172.16.50.12/21"));
    doc.add_paragraph(code("Prefix /21 → Mască: 255.255.248.0").space_before(80));
    doc.add_paragraph(code("172.16.50.12 AND 255.255.248.0 = 172.16.48.0 (Network)"));
    doc.add_paragraph(code("Broadcast: 172.16.55.255"));
    doc.add_paragraph(code("Hosturi: 172.16.48.1 — 172.16.55.254 (2046 adrese)"));

    doc.add_paragraph(
        note(
            "🎯 Mini-demo la curs: ",
            "Rulați python/apps/subnet_calc.py cu adresa 172.16.50.12/21 și proiectați \
             rezultatul. Explicați pas cu pas conversia binară.",
        )
        .space_before(200),
    );

    doc.add_paragraph(h2("3.4 FLSM vs VLSM"));
    let mut table = bordered(vec![1500, 3750, 3750]).row(
        Row::new()
            .cell(centered_header_cell("Aspect", LIGHT_BG))
            .cell(centered_header_cell("FLSM", LIGHT_BG))
            .cell(centered_header_cell("VLSM", LIGHT_BG)),
    );
    let comparison: [[&str; 3]; 4] = [
        [
            "Descriere",
            "Toate subrețelele au același prefix",
            "Prefixe diferite, adaptate necesităților",
        ],
        ["Eficiență", "Scăzută — risipă de adrese", "Ridicată — alocare optimizată"],
        ["Complexitate", "Simplă, ușor de planificat", "Necesită planificare atentă"],
        ["Utilizare", "Rețele uniforme, simple", "Rețele enterprise, cloud VPC"],
    ];
    for cells in comparison {
        let mut row = Row::new();
        for text in cells {
            row = row.cell(cell(text));
        }
        table = table.row(row);
    }
    doc.add_table(table);

    doc.add_paragraph(h2("3.5 IPv6: De ce și cum"));
    doc.add_paragraph(p("IPv6 rezolvă limitările IPv4 prin:"));
    doc.add_paragraph(bullet_lead("Spațiu extins: ", "128 biți = 3.4 × 10³⁸ adrese"));
    doc.add_paragraph(bullet_lead(
        "Header simplificat: ",
        "mai puține câmpuri, procesare mai rapidă",
    ));
    doc.add_paragraph(bullet_lead(
        "Auto-configurare (SLAAC): ",
        "nu necesită DHCP pentru adresare",
    ));

    doc.add_paragraph(h3("Reguli de comprimare IPv6"));
    for text in [
        "Eliminarea zerourilor de început din fiecare grup",
        "Înlocuirea unei secvențe continue de grupuri 0000 cu ::",
        ":: poate fi folosit o singură dată per adresă",
    ] {
        doc.add_paragraph(item("numbered-3", text));
    }
    doc.add_paragraph(
        code("2001:0db8:0000:0000:0000:0000:0000:0001 → 2001:db8::1").space_before(120),
    );
}

fn section_seminar(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("4. Seminar: Ghid Practic"));

    doc.add_paragraph(h2("4.1 Parcurs pas cu pas"));

    doc.add_paragraph(h3("Partea A: Analiza CIDR cu Python"));
    doc.add_paragraph(ilead("Timp estimat: ", "15 minute"));
    doc.add_paragraph(lead("Pas 1: ", "Navigați în directorul exercițiilor").space_before(120));
    doc.add_paragraph(code("cd python/exercises"));
    doc.add_paragraph(lead("Pas 2: ", "Analizați o adresă CIDR").space_before(100));
    doc.add_paragraph(code("python ex_5_01_cidr_flsm.py analyze 172.16.50.12/21"));
    doc.add_paragraph(
        Paragraph::new()
            .space_before(100)
            .run(Run::text("Rezultat așteptat: ").bold()),
    );
    for text in [
        "Network: 172.16.48.0/21",
        "Netmask: 255.255.248.0",
        "Broadcast: 172.16.55.255",
        "Host range: 172.16.48.1 - 172.16.55.254",
        "Valid hosts: 2046",
    ] {
        doc.add_paragraph(code(text));
    }

    doc.add_paragraph(h3("Partea B: Partiționare FLSM"));
    doc.add_paragraph(ilead("Timp estimat: ", "15 minute"));
    doc.add_paragraph(
        lead("Scenariu: ", "Împărțiți 10.0.0.0/8 în 4 subrețele egale").space_before(120),
    );
    doc.add_paragraph(code("python ex_5_01_cidr_flsm.py flsm 10.0.0.0/8 4"));
    doc.add_paragraph(
        lead(
            "Interpretare: ",
            "Fiecare subrețea primește 2³⁰ - 2 = 1.073.741.822 gazde. Prefixul crește de la /8 \
             la /10 (adăugăm 2 biți pentru a distinge 4 subrețele).",
        )
        .space_before(100),
    );

    doc.add_paragraph(h3("Partea C: Planificare VLSM"));
    doc.add_paragraph(ilead("Timp estimat: ", "20 minute"));
    doc.add_paragraph(
        lead(
            "Scenariu: ",
            "Alocați 192.168.1.0/24 pentru departamente cu nevoi diferite: IT (50), HR (20), \
             Finance (10), Management (5), legături WAN (2×2)",
        )
        .space_before(120),
    );
    doc.add_paragraph(code("python ex_5_02_vlsm_ipv6.py vlsm 192.168.1.0/24 50 20 10 5 2 2"));
    doc.add_paragraph(
        lead(
            "Principiu VLSM: ",
            "Sortăm descrescător după numărul de gazde și alocăm de la cel mai mare la cel mai \
             mic.",
        )
        .space_before(100),
    );

    doc.add_paragraph(h2("4.2 Interpretarea rezultatelor"));
    doc.add_paragraph(p("La fiecare pas, verificați:"));
    for text in [
        "Adresa de rețea să fie corect calculată (biți de host = 0)",
        "Broadcast-ul să fie ultimul din bloc",
        "Subrețelele să nu se suprapună",
        "Eficiența alocării (adrese utilizate vs disponibile)",
    ] {
        doc.add_paragraph(bullet(text));
    }

    doc.add_paragraph(
        note(
            "⚠️ Greșeală frecventă: ",
            "Studenții uită să scadă 2 din total pentru adresele de rețea și broadcast. \
             Subliniați de ce prima și ultima adresă nu pot fi atribuite gazdelor.",
        )
        .space_before(200),
    );
}

fn section_lab(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("5. Laborator Practic"));

    doc.add_paragraph(h2("5.1 Experiment: Topologie Mininet cu rutare"));
    doc.add_paragraph(lead(
        "Obiectiv: ",
        "Construiți o rețea cu 2 subrețele și un router, apoi verificați conectivitatea.",
    ));

    doc.add_paragraph(h3("Pas 0: Verificare mediu"));
    doc.add_paragraph(code("make verify"));
    doc.add_paragraph(p("Toate testele trebuie să treacă înainte de a continua."));

    doc.add_paragraph(h3("Pas 1: Pornirea topologiei de bază"));
    doc.add_paragraph(code("cd mininet"));
    doc.add_paragraph(code("sudo python3 topo_5_base.py"));
    doc.add_paragraph(
        Paragraph::new()
            .space_before(100)
            .run(Run::text("Topologie: ").bold()),
    );
    doc.add_paragraph(code("h1 (10.0.1.10/24) -- [s1] -- r1 -- [s2] -- h2 (10.0.2.10/24)"));

    doc.add_paragraph(h3("Pas 2: Testare conectivitate"));
    doc.add_paragraph(p("Din CLI-ul Mininet:"));
    doc.add_paragraph(code("mininet> h1 ping -c 3 h2"));
    doc.add_paragraph(lead("Rezultat așteptat: ", "0% packet loss").space_before(100));

    doc.add_paragraph(h3("Pas 3: Analiza rutelor"));
    doc.add_paragraph(code("mininet> h1 ip route"));
    doc.add_paragraph(code("mininet> r1 ip route"));

    doc.add_paragraph(h2("5.2 Experiment: VLSM cu topologie extinsă"));
    doc.add_paragraph(code("sudo python3 topo_5_extended.py"));
    doc.add_paragraph(p(
        "Această topologie include 3 subrețele cu prefixe diferite, demonstrând VLSM în \
         practică.",
    ));

    doc.add_paragraph(h2("5.3 Extensii opționale"));
    doc.add_paragraph(item_lead(
        "numbered-4",
        "Captură pachete: ",
        "mininet> h1 tcpdump -i h1-eth0 -c 10 -w /tmp/h1_capture.pcap &",
    ));
    doc.add_paragraph(item_lead("numbered-4", "Test debit: ", "Rulați iperf între h1 și h2"));
    doc.add_paragraph(item_lead(
        "numbered-4",
        "IPv6 dual-stack: ",
        "Adăugați adrese IPv6 și testați conectivitatea",
    ));
}

fn section_debugging(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("6. Greșeli Frecvente și Debugging"));

    let mut table = bordered(vec![3000, 3000, 3000]).row(
        Row::new()
            .cell(header_cell("Simptom", WARNING_BG))
            .cell(header_cell("Cauză probabilă", WARNING_BG))
            .cell(header_cell("Soluție", WARNING_BG)),
    );
    let pitfalls: [[&str; 3]; 5] = [
        [
            "ping: Network unreachable",
            "Lipsă rută către destinație sau gateway incorect",
            "Verificați ip route și default gateway",
        ],
        [
            "Subrețele se suprapun",
            "Greșeală la calculul prefixului sau alocării",
            "Recalculați de la zero, verificați suprapunerea",
        ],
        [
            "IP forwarding dezactivat",
            "Routerul nu transmite pachete între interfețe",
            "sysctl net.ipv4.ip_forward=1",
        ],
        [
            "Mininet nu pornește",
            "Resurse blocate de sesiune anterioară",
            "make clean sau sudo mn -c",
        ],
        [
            "Număr incorect de gazde",
            "Nu s-au scăzut adresele de rețea/broadcast",
            "Hosturi = 2^(32-prefix) - 2",
        ],
    ];
    for cells in pitfalls {
        let mut row = Row::new();
        for text in cells {
            row = row.cell(cell(text));
        }
        table = table.row(row);
    }
    doc.add_table(table);

    doc.add_paragraph(h2("Comenzi utile pentru debugging").space_before(360));
    for text in [
        "# Verificare configurație IP",
        "ip addr show",
        "",
        "# Afișare tabel de rutare",
        "ip route",
        "",
        "# Captură live pachete ICMP",
        "sudo tcpdump -i any icmp -n",
        "",
        "# Verificare IP forwarding",
        "sysctl net.ipv4.ip_forward",
    ] {
        doc.add_paragraph(code(text));
    }
}

fn section_exercises(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("7. Exerciții de Consolidare"));

    doc.add_paragraph(h2("Exercițiul S5.1: Analiza CIDR (10 puncte)"));
    doc.add_paragraph(lead("Cerință: ", "Pentru adresa 10.45.128.200/18, determinați:"));
    for text in [
        "Adresa de rețea și masca în format dotted-decimal",
        "Adresa de broadcast",
        "Intervalul de gazde valide și numărul lor",
    ] {
        doc.add_paragraph(bullet(text));
    }
    doc.add_paragraph(ilead(
        "Verificare: ",
        "python ex_5_01_cidr_flsm.py analyze 10.45.128.200/18",
    ));

    doc.add_paragraph(h2("Exercițiul S5.2: Partiționare FLSM (10 puncte)"));
    doc.add_paragraph(lead(
        "Cerință: ",
        "Împărțiți 172.30.0.0/20 în 32 de subrețele egale. Listați primele 5 subrețele cu \
         adresa de rețea, broadcast și interval gazde.",
    ));

    doc.add_paragraph(h2("Exercițiul S5.3: Planificare VLSM (15 puncte)"));
    doc.add_paragraph(lead("Scenariu: ", "Compania TechCorp are sediu cu 4 departamente:"));
    for text in [
        "Development: 100 stații",
        "Sales: 45 stații",
        "HR: 15 stații",
        "Server Room: 10 servere",
        "2 legături WAN (câte 2 adrese fiecare)",
    ] {
        doc.add_paragraph(bullet(text));
    }
    doc.add_paragraph(lead(
        "Cerință: ",
        "Proiectați schema VLSM pornind de la 192.168.50.0/24. Calculați eficiența alocării.",
    ));

    doc.add_paragraph(h2("Exercițiul S5.4: Comprimare IPv6 (10 puncte)"));
    doc.add_paragraph(lead("Cerință: ", "Comprimați la forma minimală:"));
    for text in [
        "a) 2001:0db8:0000:0042:0000:0000:0000:8a2e",
        "b) fe80:0000:0000:0000:0000:0000:0000:0001",
        "c) 0000:0000:0000:0000:0000:ffff:c0a8:0164",
    ] {
        doc.add_paragraph(code(text));
    }

    doc.add_paragraph(h2("Exercițiul S5.5: Expandare IPv6 (10 puncte)"));
    doc.add_paragraph(lead("Cerință: ", "Expandați la forma completă:"));
    for text in ["a) 2001:db8::1", "b) fe80::1", "c) ::ffff:192.168.1.100"] {
        doc.add_paragraph(code(text));
    }

    doc.add_paragraph(h2("Exercițiul S5.6 — Challenge (15 puncte)"));
    doc.add_paragraph(lead(
        "Scenariu avansat: ",
        "O universitate primește blocul IPv6 2001:db8:acad::/48. Proiectați o schemă de \
         adresare care să aloce:",
    ));
    for text in [
        "Câte un /64 pentru fiecare din cele 8 facultăți",
        "4 subrețele /64 pentru infrastructură (servere, management)",
        "Rezervați 4 subrețele /64 pentru extindere viitoare",
    ] {
        doc.add_paragraph(bullet(text));
    }
    doc.add_paragraph(lead(
        "Cerință: ",
        "Prezentați planul de alocare și justificați convențiile de numerotare.",
    ));
}

fn section_reflection(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("8. Mini-Reflecție"));

    doc.add_paragraph(h2("Ce am învățat"));
    doc.add_paragraph(p(
        "După parcurgerea acestei săptămâni, ar trebui să puteți răspunde la:",
    ));
    for text in [
        "Care este diferența fundamentală dintre o adresă MAC și o adresă IP?",
        "De ce folosim CIDR în loc de sistemul claselor?",
        "Când este preferabil VLSM față de FLSM?",
        "Care sunt principalele avantaje ale IPv6?",
    ] {
        doc.add_paragraph(item("numbered-5", text));
    }

    doc.add_paragraph(h2("Unde se folosește în practică"));
    doc.add_paragraph(bullet_lead(
        "Cloud computing: ",
        "VPC design în AWS/Azure/GCP necesită planificare CIDR",
    ));
    doc.add_paragraph(bullet_lead(
        "Containerizare: ",
        "Kubernetes folosește subrețele pentru Pods și Services",
    ));
    doc.add_paragraph(bullet_lead("Securitate: ", "Firewalls și ACL-uri operează pe prefixe CIDR"));
    doc.add_paragraph(bullet_lead(
        "DevOps/IaC: ",
        "Terraform, Ansible gestionează adrese IP programatic",
    ));

    doc.add_paragraph(h2("Legătura cu rolul de programator"));
    doc.add_paragraph(p(
        "Programarea de rețea modernă presupune configurarea corectă a bind addresses, \
         înțelegerea NAT traversal și debugging-ul problemelor de conectivitate. Cunoașterea \
         temeinică a adresării IP transformă un programator competent într-unul care poate \
         lucra eficient cu infrastructură distribuită.",
    ));
}

fn section_project(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("9. Contribuția Săptămânii la Proiect"));

    doc.add_paragraph(h2("Artefact livrabil"));
    doc.add_paragraph(lead("Deadline: ", "Până la începutul săptămânii 6"));
    doc.add_paragraph(
        lead(
            "Cerință pentru echipă: ",
            "Adăugați la proiect o schemă de adresare care include:",
        )
        .space_before(160),
    );
    for text in [
        "Minimum 3 subrețele distincte (pot fi FLSM sau VLSM)",
        "Justificarea alegerii prefixelor (de ce aceste mărimi?)",
        "O diagramă de topologie (poate fi ASCII art sau imagine)",
        "Opțional: script Mininet funcțional care demonstrează conectivitatea",
    ] {
        doc.add_paragraph(item("numbered-6", text));
    }

    doc.add_paragraph(h2("Criterii de evaluare"));
    let mut table = bordered(vec![5000, 2000, 2000]).row(
        Row::new()
            .cell(header_cell("Criteriu", LIGHT_BG))
            .cell(centered_header_cell("Punctaj", LIGHT_BG))
            .cell(centered_header_cell("Bonus", LIGHT_BG)),
    );
    let criteria: [[&str; 3]; 4] = [
        ["Schema conține minim 3 subrețele fără suprapunere", "30%", "—"],
        ["Justificarea alegerilor este coerentă", "25%", "—"],
        ["Topologia este clară și completă", "25%", "—"],
        ["Script Mininet funcțional", "20%", "+10%"],
    ];
    for [criterion, score, bonus] in criteria {
        table = table.row(
            Row::new()
                .cell(cell(criterion))
                .cell(centered_cell(score))
                .cell(centered_cell(bonus)),
        );
    }
    doc.add_table(table);
}

fn section_bibliography(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("10. Bibliografie și Resurse"));

    doc.add_paragraph(h2("Lucrări cu DOI"));
    let mut table = bordered(vec![500, 5500, 3000]).row(
        Row::new()
            .cell(centered_header_cell("#", LIGHT_BG))
            .cell(header_cell("Referință", LIGHT_BG))
            .cell(header_cell("DOI", LIGHT_BG)),
    );
    let references: [[&str; 3]; 3] = [
        [
            "1",
            "Kurose, J. F., & Ross, K. W. (2017). Computer Networking: A Top-Down Approach \
             (7th ed.). Pearson.",
            "—",
        ],
        [
            "2",
            "Rhodes, B., & Goetzen, J. (2014). Foundations of Python Network Programming (3rd \
             ed.). Apress.",
            "10.1007/978-1-4302-5855-1",
        ],
        [
            "3",
            "Lantz, B., et al. (2010). A Network in a Laptop: Rapid Prototyping for SDN. \
             HotNets.",
            "10.1145/1868447.1868466",
        ],
    ];
    for [index, reference, doi] in references {
        table = table.row(
            Row::new()
                .cell(centered_cell(index))
                .cell(cell(reference))
                .cell(cell(doi)),
        );
    }
    doc.add_table(table);

    doc.add_paragraph(h2("Standarde și specificații").space_before(360));
    doc.add_paragraph(bullet_lead("RFC 791 ", "— Internet Protocol (IPv4)"));
    doc.add_paragraph(bullet_lead("RFC 1918 ", "— Address Allocation for Private Internets"));
    doc.add_paragraph(bullet_lead("RFC 4291 ", "— IP Version 6 Addressing Architecture"));
    doc.add_paragraph(bullet_lead("RFC 4632 ", "— Classless Inter-Domain Routing (CIDR)"));
    doc.add_paragraph(bullet_lead("RFC 8200 ", "— Internet Protocol, Version 6 (IPv6)"));

    doc.add_paragraph(h2("Resurse online recomandate").space_before(360));
    for text in [
        "Mininet Walkthrough: http://mininet.org/walkthrough/",
        "Python ipaddress module: https://docs.python.org/3/library/ipaddress.html",
        "IANA IPv4 Special-Purpose Registry: \
         https://www.iana.org/assignments/iana-ipv4-special-registry",
    ] {
        doc.add_paragraph(bullet(text));
    }

    doc.add_paragraph(spacer(720));
    doc.add_paragraph(Paragraph::new().align(Alignment::Center).run(
        Run::text("— Sfârșit document —").size(20).italic().color(MUTED),
    ));
    doc.add_paragraph(Paragraph::new().align(Alignment::Center).run(
        Run::text("Revolvix&Hypotheticalandrei").size(16).color(TABLE_BORDER_COLOR),
    ));
}
