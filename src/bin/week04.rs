//! Generates the week 4 handout: custom text and binary protocols over
//! TCP and UDP.
use catedra::{
    Alignment, Cell, Document, NumberingDefinition, NumberingRegistry, Package, Paragraph, Row,
    Run, SectionProperties, Style, StyleRegistry, Table, TableBorder,
};

const OUTPUT_PATH: &str = "Curs4_Seminar4_Laborator4.docx";

const HEADING_1_COLOR: &str = "1a365d";
const HEADING_2_COLOR: &str = "2c5282";
const HEADING_3_COLOR: &str = "3182ce";
const TABLE_BORDER_COLOR: &str = "999999";
const TABLE_HEADER_FILL: &str = "E8F4FD";

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
    Paragraph::new().space_after(120).run(Run::text(text))
}

fn pb(text: &str) -> Paragraph {
    Paragraph::new().space_after(120).run(Run::text(text).bold())
}

fn pmix(label: &str, rest: &str) -> Paragraph {
    Paragraph::new()
        .space_after(120)
        .run(Run::text(label).bold())
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

fn bullet(text: &str) -> Paragraph {
    Paragraph::new().numbered("bullet-list").run(Run::text(text))
}

fn item(reference: &str, text: &str) -> Paragraph {
    Paragraph::new().numbered(reference).run(Run::text(text))
}

fn note(text: &str) -> Paragraph {
    Paragraph::styled("InstructorNote")
        .space_before(200)
        .space_after(200)
        .run(Run::text(text))
}

fn header_cell(text: &str) -> Cell {
    Cell::new()
        .shading(TABLE_HEADER_FILL)
        .paragraph(pb(text).align(Alignment::Center))
}

fn body_cell(text: &str) -> Cell {
    Cell::new().paragraph(p(text))
}

/// Bordered table with a shaded header row followed by plain text rows.
fn grid(widths: Vec<u32>, header: &[&str], body: &[&[&str]]) -> Table {
    let mut head = Row::new();
    for &text in header {
        head = head.cell(header_cell(text));
    }
    let mut table = Table::new(widths)
        .border(TableBorder::new(1, TABLE_BORDER_COLOR))
        .row(head);
    for cells in body {
        let mut row = Row::new();
        for &text in *cells {
            row = row.cell(body_cell(text));
        }
        table = table.row(row);
    }
    table
}

fn styles() -> StyleRegistry {
    let mut styles = StyleRegistry::with_defaults("Arial", 24);
    styles.register(
        Style::new("Title", "Title")
            .size(56)
            .bold()
            .color(HEADING_1_COLOR)
            .space_before(240)
            .space_after(240)
            .align(Alignment::Center),
    );
    styles.register(
        Style::new("Heading1", "Heading 1")
            .size(36)
            .bold()
            .color(HEADING_1_COLOR)
            .space_before(360)
            .space_after(200)
            .outline_level(0),
    );
    styles.register(
        Style::new("Heading2", "Heading 2")
            .size(30)
            .bold()
            .color(HEADING_2_COLOR)
            .space_before(280)
            .space_after(160)
            .outline_level(1),
    );
    styles.register(
        Style::new("Heading3", "Heading 3")
            .size(26)
            .bold()
            .color(HEADING_3_COLOR)
            .space_before(200)
            .space_after(120)
            .outline_level(2),
    );
    styles.register(
        Style::new("InstructorNote", "Instructor Note")
            .size(22)
            .italic()
            .color("666666")
            .space_before(100)
            .space_after(100)
            .indent_left(720)
            .shading("FFF8E1"),
    );
    styles
}

fn numbering() -> NumberingRegistry {
    let mut numbering = NumberingRegistry::new();
    numbering.register(NumberingDefinition::bullet("bullet-list"));
    for name in [
        "numbered-list-1",
        "numbered-list-2",
        "numbered-list-3",
        "numbered-list-ex",
    ] {
        numbering.register(NumberingDefinition::decimal(name));
    }
    numbering
}

fn build_document() -> Document {
    let mut doc = Document::new(styles(), numbering());
    doc.set_section(SectionProperties::a4());
    doc.set_title("Săptămâna 4 — Protocoale Text și Binare Custom peste TCP și UDP");
    doc.set_creator("Revolvix&Hypotheticalandrei");

    doc.set_header(vec![Paragraph::new().align(Alignment::Right).run(
        Run::text("Rețele de Calculatoare | Săptămâna 4")
            .size(20)
            .color("666666"),
    )]);
    doc.set_footer(vec![
        Paragraph::new()
            .align(Alignment::Center)
            .run(Run::text("Pagina ").size(20))
            .run(Run::page_number().size(20))
            .run(Run::text(" din ").size(20))
            .run(Run::page_count().size(20))
            .run(Run::text(" | Revolvix&Hypotheticalandrei").size(18).color("999999")),
    ]);

    title_page(&mut doc);
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

fn title_page(doc: &mut Document) {
    doc.add_paragraph(Paragraph::styled("Title").run(Run::text("Săptămâna 4")));
    doc.add_paragraph(
        Paragraph::new()
            .align(Alignment::Center)
            .space_after(480)
            .run(
                Run::text("Protocoale Text și Binare Custom peste TCP și UDP")
                    .size(36)
                    .color(HEADING_2_COLOR),
            ),
    );

    doc.add_table(
        Table::new(vec![4680, 4680])
            .border(TableBorder::new(1, TABLE_BORDER_COLOR))
            .row(
                Row::new()
                    .cell(Cell::new().paragraph(pmix("Disciplină: ", "Rețele de Calculatoare")))
                    .cell(Cell::new().paragraph(pmix("Program: ", "Informatică Economică"))),
            )
            .row(
                Row::new()
                    .cell(Cell::new().paragraph(pmix("An: ", "3, Semestrul 2")))
                    .cell(Cell::new().paragraph(pmix("Durată: ", "2h curs + 2h seminar"))),
            ),
    );
}

fn section_goals(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("1. Scopul săptămânii"));

    doc.add_paragraph(h2("1.1 Ce vom învăța"));
    doc.add_paragraph(p(
        "Această săptămână marchează tranziția de la utilizarea protocoalelor standard (HTTP, \
         FTP) la proiectarea și implementarea protocoalelor proprii. Studenții vor dobândi \
         competențele necesare pentru a specifica, implementa și testa protocoale de comunicare \
         adaptate nevoilor specifice ale aplicațiilor.",
    ));

    doc.add_paragraph(pb("Obiective de învățare:"));
    for text in [
        "Proiectarea protocoalelor text cu format human-readable",
        "Proiectarea protocoalelor binare cu header fix și payload variabil",
        "Rezolvarea problemei de framing în TCP streams",
        "Serializare și deserializare binară cu struct.pack/unpack",
        "Validarea integrității datelor cu CRC32",
        "Implementare pattern fire-and-forget pentru UDP",
    ] {
        doc.add_paragraph(bullet(text));
    }

    doc.add_paragraph(h2("1.2 De ce contează"));
    doc.add_paragraph(p(
        "În practica profesională, programatorii se confruntă frecvent cu situații în care \
         protocoalele standard nu sunt optimale. Aplicațiile de gaming, IoT, streaming și \
         trading financiar necesită protocoale custom pentru a minimiza latența și overhead-ul. \
         Înțelegerea principiilor de proiectare a protocoalelor permite:",
    ));
    for text in [
        "Optimizarea performanței: reducerea overhead-ului de la sute de bytes (HTTP) la zeci de bytes",
        "Control granular: specificarea exactă a comportamentului în cazuri de eroare",
        "Debugging avansat: capacitatea de a analiza și depana traficul la nivel de bytes",
        "Interoperabilitate: comunicarea cu sisteme embedded și legacy",
    ] {
        doc.add_paragraph(item("numbered-list-1", text));
    }

    doc.add_paragraph(note(
        "📋 Notă instructor: Această săptămână este fundamentală pentru proiectul de echipă. \
         Asigurați-vă că studenții înțeleg că vor trebui să implementeze un protocol custom \
         pentru aplicația lor. Alocați timp pentru întrebări despre cerințele proiectului.",
    ));
}

fn section_prerequisites(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("2. Prerechizite și recapitulare"));

    doc.add_paragraph(h2("2.1 Cunoștințe necesare din S1-S3"));
    doc.add_table(grid(
        vec![3120, 3120, 3120],
        &["Săptămâna", "Concept", "Relevanță pentru S4"],
        &[
            &["S1", "Wireshark, tshark, netcat", "Analiza traficului custom"],
            &["S2", "Sockets TCP/UDP de bază", "Fundament pentru protocoale"],
            &["S3", "Server concurent, threading", "Handler clienți multipli"],
        ],
    ));

    doc.add_paragraph(h2("2.2 Recapitulare TCP vs UDP").space_before(300));
    doc.add_table(grid(
        vec![4680, 4680],
        &[
            "TCP (Transmission Control Protocol)",
            "UDP (User Datagram Protocol)",
        ],
        &[
            &["Connection-oriented (necesită connect())", "Connectionless (sendto() direct)"],
            &["Reliable: ACK, retransmisie automată", "Best-effort: fără garanții de livrare"],
            &["Ordered delivery garantată", "Fără garanție de ordine"],
            &["Stream-based (bytes continui)", "Message-based (datagrame discrete)"],
        ],
    ));
}

fn section_lecture(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("3. Curs: Protocoale Custom"));

    doc.add_paragraph(h2("3.1 Motivația protocoalelor custom"));
    doc.add_paragraph(p(
        "Protocoalele standard precum HTTP, FTP sau SMTP sunt proiectate pentru versatilitate \
         și interoperabilitate largă. Această generalitate vine cu un cost: overhead \
         semnificativ pentru cazuri simple. Un request HTTP minimal pentru a obține o valoare \
         poate depăși 500 bytes, în timp ce un protocol binar custom poate realiza același \
         lucru în 14-20 bytes.",
    ));

    doc.add_paragraph(pb("Cazuri de utilizare pentru protocoale custom:"));
    for text in [
        "Gaming: latență minimă, update-uri de stare frecvente",
        "IoT/Senzori: dispozitive cu resurse limitate, bandă îngustă",
        "Trading financiar: microsecunde contează",
        "Sisteme embedded: memorie și procesor limitate",
    ] {
        doc.add_paragraph(bullet(text));
    }

    doc.add_paragraph(h2("3.2 Protocoale TEXT"));
    doc.add_paragraph(p(
        "Protocoalele text folosesc caractere ASCII/UTF-8 human-readable. Avantajul principal \
         este debugging-ul facil - traficul poate fi inspectat direct cu netcat sau telnet.",
    ));
    doc.add_paragraph(pb("Format protocol TEXT pentru S4:"));
    doc.add_paragraph(p(
        "Mesajele urmează formatul: \"<LUNGIME> <PAYLOAD>\\n\" unde LUNGIME este un număr \
         zecimal reprezentând lungimea payload-ului în bytes, urmat de un spațiu separator și \
         payload-ul propriu-zis, terminat cu newline.",
    ));
    doc.add_paragraph(pmix(
        "Exemplu: ",
        "Clientul trimite \"5 Hello\\n\" - serverul primește și parsează payload-ul \"Hello\".",
    ));

    doc.add_paragraph(h3("Problema Framing-ului în TCP"));
    doc.add_paragraph(p(
        "TCP este un protocol stream-based, ceea ce înseamnă că datele trimise în apeluri \
         send() separate pot fi primite concatenate într-un singur recv(), sau fragmentate în \
         multiple recv()-uri. Această caracteristică impune necesitatea unui mecanism de \
         delimitare a mesajelor (framing).",
    ));
    doc.add_paragraph(pb("Soluții de framing:"));
    for text in [
        "Delimitator fix (newline, null byte) - simplu dar payload-ul nu poate conține delimitatorul",
        "Lungime prefixată - payload-ul e precedat de lungimea sa",
        "Header fix - structură cunoscută la început, include lungimea",
    ] {
        doc.add_paragraph(item("numbered-list-2", text));
    }

    doc.add_paragraph(h2("3.3 Protocoale BINARE"));
    doc.add_paragraph(p(
        "Protocoalele binare encodează datele în format binar compact. Principalele avantaje \
         sunt eficiența (overhead minim) și performanța (parsing rapid). Dezavantajul este că \
         debugging-ul necesită instrumente specializate (Wireshark, hex dump).",
    ));
    doc.add_paragraph(pb("Structura header-ului BINAR pentru S4 (14 bytes):"));
    doc.add_table(grid(
        vec![1500, 1200, 2000, 4660],
        &["Offset", "Bytes", "Câmp", "Descriere"],
        &[
            &["0", "2", "MAGIC", "\"NP\" (0x4E50) - identificator protocol"],
            &["2", "1", "VERSION", "Versiune protocol (0x01)"],
            &["3", "1", "TYPE", "Tip mesaj (0=req, 1=resp, 2=error)"],
            &["4", "4", "PAYLOAD_LEN", "Lungime payload (big-endian, uint32)"],
            &["8", "2", "SEQUENCE", "Număr secvență (big-endian, uint16)"],
            &["10", "4", "CRC32", "Checksum payload (big-endian, uint32)"],
        ],
    ));

    doc.add_paragraph(h3("Serializare cu struct în Python").space_before(300));
    doc.add_paragraph(p(
        "Modulul struct din Python permite conversia între valori Python și reprezentări \
         binare. Formatul '>2sBBIHI' specifică: big-endian (>), 2 bytes string (2s), două \
         unsigned char (BB), unsigned int (I), unsigned short (H), unsigned int (I).",
    ));

    doc.add_paragraph(h2("3.4 Protocol UDP pentru senzori"));
    doc.add_paragraph(p(
        "UDP este ideal pentru aplicații care necesită latență minimă și tolerează pierderi \
         ocazionale. Un senzor IoT care trimite citiri la fiecare 2 secunde poate tolera \
         pierderea unei citiri - următoarea oricum vine curând.",
    ));
    doc.add_paragraph(pb("Format datagramă senzor (23 bytes fix):"));
    doc.add_paragraph(p(
        "Versiune (1B) + SensorID (4B) + Temperatură float (4B) + Locație ASCII padded (10B) + \
         CRC32 (4B)",
    ));

    doc.add_paragraph(note(
        "📋 Notă instructor: La acest punct, demonstrați live diferența dintre TEXT și BINAR \
         capturând trafic cu tshark. Arătați payload-ul TEXT direct în ASCII vs hex dump \
         pentru BINAR. Timing estimat: 5-7 minute.",
    ));
}

fn section_seminar(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("4. Seminar: Implementare ghidată"));

    doc.add_paragraph(h2("4.1 Pregătire mediu de lucru"));
    doc.add_paragraph(p(
        "Înainte de a începe implementarea, verificați că aveți toate instrumentele necesare \
         instalate și funcționale.",
    ));
    doc.add_paragraph(pb("Comenzi de verificare:"));
    for text in [
        "python3 --version (necesită 3.8+)",
        "pip3 --version",
        "tshark --version",
        "nc -h (netcat)",
    ] {
        doc.add_paragraph(p(text));
    }

    doc.add_paragraph(h2("4.2 Implementare Protocol TEXT - pas cu pas"));
    doc.add_paragraph(h3("Pasul 1: Funcția recv_until()"));
    doc.add_paragraph(p(
        "Această funcție citește bytes din socket până întâlnește delimitatorul specificat. \
         Este esențială pentru protocoale text care folosesc newline sau alt caracter ca \
         terminator de mesaj.",
    ));
    doc.add_paragraph(pb("Pseudocod:"));
    for text in [
        "1. Inițializează buffer gol",
        "2. Repetă: citește 1 byte, adaugă la buffer",
        "3. Dacă delimitatorul e în buffer, returnează buffer",
        "4. Dacă conexiunea s-a închis (recv returnează empty), ridică excepție",
    ] {
        doc.add_paragraph(p(text));
    }

    doc.add_paragraph(h3("Pasul 2: Funcția parse_message()"));
    doc.add_paragraph(p(
        "Extrage lungimea declarată și payload-ul din formatul '<LEN> <PAYLOAD>'. Validează că \
         lungimea declarată corespunde cu lungimea reală a payload-ului.",
    ));

    doc.add_paragraph(h3("Pasul 3: Handler client"));
    doc.add_paragraph(p(
        "Funcția handle_client primește conexiunea acceptată și procesează mesaje în buclă \
         până la deconectare. Fiecare mesaj primit e parsăt, procesat (ecou în exemplul \
         nostru) și răspunsul e trimis înapoi.",
    ));

    doc.add_paragraph(h2("4.3 Implementare Protocol BINAR - pas cu pas"));
    doc.add_paragraph(h3("Pasul 1: Funcția recv_exact()"));
    doc.add_paragraph(p(
        "Spre deosebire de recv_until(), această funcție citește exact N bytes, acumulând în \
         buffer până ajunge la lungimea cerută. Este necesară deoarece recv(n) poate returna \
         mai puțin de n bytes.",
    ));
    doc.add_paragraph(h3("Pasul 2: Pack și Unpack header"));
    doc.add_paragraph(p(
        "Utilizați struct.pack pentru a crea header-ul și struct.unpack pentru a-l citi. \
         Formatul '>2sBBIHI' corespunde structurii definite (14 bytes total).",
    ));
    doc.add_paragraph(h3("Pasul 3: Calcul și validare CRC32"));
    doc.add_paragraph(p(
        "CRC32 se calculează peste payload cu zlib.crc32(data) & 0xFFFFFFFF. Masca \
         & 0xFFFFFFFF asigură rezultat unsigned pe 32 biți. La recepție, comparați CRC-ul din \
         header cu cel calculat local.",
    ));

    doc.add_paragraph(note(
        "📋 Notă instructor: Lăsați studenții să implementeze singuri recv_exact() (5 min), \
         apoi discutați soluțiile. Greșeli comune: nu verifică dacă recv() returnează empty \
         bytes (conexiune închisă).",
    ));
}

fn section_lab(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("5. Laborator: Experimente practice"));

    doc.add_paragraph(h2("5.1 Experiment 1: Protocol TEXT funcțional"));
    doc.add_paragraph(pb("Obiectiv: Rularea și testarea serverului și clientului TEXT."));
    doc.add_paragraph(pb("Pași:"));
    for text in [
        "Deschideți Terminal 1, navigați la /python/apps/",
        "Porniți serverul: python3 text_proto_server.py",
        "Deschideți Terminal 2, testați cu netcat: echo '5 Hello' | nc localhost 3333",
        "Rulați clientul Python: python3 text_proto_client.py",
    ] {
        doc.add_paragraph(item("numbered-list-3", text));
    }
    doc.add_paragraph(pb("Rezultat așteptat:"));
    doc.add_paragraph(p(
        "Serverul afișează mesajele primite și trimite ecou înapoi. Clientul primește \
         răspunsurile și le afișează.",
    ));

    doc.add_paragraph(h2("5.2 Experiment 2: Captură și analiză trafic"));
    doc.add_paragraph(pb("Obiectiv: Capturarea și analiza traficului TEXT și BINAR cu tshark."));
    doc.add_paragraph(pb("Comenzi pentru captură TEXT:"));
    doc.add_paragraph(p(
        "sudo tshark -i lo -f 'tcp port 3333' -Y 'tcp.payload' -T fields -e frame.number -e \
         tcp.payload",
    ));
    doc.add_paragraph(pb("Comenzi pentru captură BINAR:"));
    doc.add_paragraph(p("sudo tshark -i lo -f 'tcp port 4444' -Y 'tcp.payload' -x"));
    doc.add_paragraph(pb("Întrebări de analiză:"));
    for text in [
        "Ce observați în payload-ul TEXT vs BINAR?",
        "Puteți identifica header-ul de 14 bytes în traficul BINAR?",
        "Care este overhead-ul pentru un mesaj 'Hello' în fiecare protocol?",
    ] {
        doc.add_paragraph(bullet(text));
    }

    doc.add_paragraph(h2("5.3 Experiment 3: Simulare senzori UDP în Mininet"));
    doc.add_paragraph(pb("Obiectiv: Testarea protocolului UDP sensor într-o topologie izolată."));
    doc.add_paragraph(p(
        "Utilizați scenariul Mininet din /mininet/scenario_udp_demo.py care creează o \
         topologie cu 2 senzori și un colector, incluzând simulare de pierderi pe una din \
         legături.",
    ));
}

fn section_debugging(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("6. Greșeli frecvente și debugging"));

    doc.add_table(grid(
        vec![3000, 3000, 3360],
        &["Simptom", "Cauză probabilă", "Diagnostic"],
        &[
            &["recv() blochează indefinit", "Nu s-a trimis suficient", "Verifică dacă \\n e trimis"],
            &["Date trunchiare", "recv() < bytes așteptați", "Folosește recv_exact()"],
            &["CRC mismatch constant", "Endianness greșit", "Verifică > vs < în format"],
            &["Magic invalid", "Offset greșit în unpack", "Verifică HEADER_SIZE"],
            &["Conexiune refuzată", "Server nu ascultă", "netstat -tlnp | grep PORT"],
        ],
    ));

    doc.add_paragraph(h2("6.1 Comenzi utile de debugging").space_before(300));
    doc.add_paragraph(pb("Verificare port activ:"));
    doc.add_paragraph(p("netstat -tlnp | grep 3333"));
    doc.add_paragraph(pb("Test conexiune rapidă:"));
    doc.add_paragraph(p("nc -v localhost 3333"));
    doc.add_paragraph(pb("Captură raw pe interfață:"));
    doc.add_paragraph(p("sudo tcpdump -i lo port 3333 -XX"));
    doc.add_paragraph(pb("Verificare procese Python:"));
    doc.add_paragraph(p("ps aux | grep python"));
}

fn section_exercises(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("7. Exerciții de consolidare"));

    let exercises: [(&str, &str); 6] = [
        (
            "Exercițiu 1: Protocol TEXT cu comenzi (Înțelegere)",
            "Extindeți protocolul TEXT pentru a suporta comenzi multiple: ECHO, UPPER, LOWER, \
             REVERSE, COUNT. Formatul devine \"<CMD> <LEN> <PAYLOAD>\\n\". Serverul trebuie să \
             proceseze comanda și să returneze rezultatul corespunzător.",
        ),
        (
            "Exercițiu 2: Analiza overhead (Aplicare)",
            "Capturați 10 mesaje TEXT și 10 BINAR. Calculați overhead-ul total (bytes protocol \
             / bytes payload) pentru fiecare. Răspundeți: care protocol e mai eficient pentru \
             payload de 5 bytes? Dar pentru 500 bytes?",
        ),
        (
            "Exercițiu 3: Protocol BINAR cu tipuri (Aplicare)",
            "Extindeți header-ul BINAR cu un câmp CONTENT_TYPE: 0=text UTF-8, 1=JSON, 2=bytes \
             raw. Serverul trebuie să proceseze diferit fiecare tip (pentru JSON: deserializare \
             și extragere câmp specific).",
        ),
        (
            "Exercițiu 4: Agregator UDP (Analiză)",
            "Creați un agregator care primește date de la multipli senzori și: (a) calculează \
             media temperaturii per locație, (b) detectează senzori care nu au trimis în \
             ultimele 30 secunde, (c) generează raport JSON periodic.",
        ),
        (
            "Exercițiu 5: Testare în Mininet (Sinteză)",
            "Implementați o topologie Mininet cu 3 hosturi și testați protocolul BINAR. \
             Adăugați delay de 50ms pe o legătură cu 'tc netem' și măsurați impactul asupra \
             throughput-ului.",
        ),
        (
            "Exercițiu 6 - Challenge: Protocol hibrid (Creație)",
            "Proiectați și implementați un protocol hibrid care: (1) folosește handshake TEXT \
             pentru negociere capabilități, (2) trece la mod BINAR pentru transfer date, (3) \
             suportă compresie opțională zlib, (4) include timestamp în fiecare mesaj. Livrați \
             specificație documentată, implementare server+client, și captură tshark \
             demonstrativă.",
        ),
    ];
    for (heading, body) in exercises {
        doc.add_paragraph(h2(heading));
        doc.add_paragraph(p(body));
    }
}

fn section_reflection(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("8. Mini-reflecție"));

    doc.add_paragraph(h2("8.1 Ce am învățat"));
    doc.add_paragraph(pb("Concepte fundamentale:"));
    for text in [
        "Diferența fundamentală între protocoale text (human-readable) și binare (compact, eficient)",
        "Problema framing-ului în TCP și soluții: delimitatori, lungime prefixată, header fix",
        "Tehnici de citire: recv_until() pentru text, recv_exact() pentru binar",
        "Serializare binară cu struct.pack/unpack și convenții endianness",
        "Validarea integrității cu CRC32 - detectare erori, nu securitate",
        "Caracteristicile UDP pentru aplicații fire-and-forget",
    ] {
        doc.add_paragraph(bullet(text));
    }

    doc.add_paragraph(h2("8.2 Unde se folosește în practică"));
    doc.add_table(grid(
        vec![3120, 3120, 3120],
        &["Domeniu", "Exemplu protocol", "Caracteristici"],
        &[
            &["Cache/DB", "Redis RESP, Memcached", "Text simplu, high throughput"],
            &["Gaming", "Protocol custom UDP", "Latență minimă, toleranță pierderi"],
            &["IoT", "MQTT, CoAP", "Overhead minim, dispozitive limitate"],
            &["RPC", "gRPC (Protocol Buffers)", "Binar eficient, schema-based"],
        ],
    ));

    doc.add_paragraph(h2("8.3 Legătura cu rolul de programator").space_before(300));
    doc.add_paragraph(p(
        "Competențele dobândite în această săptămână sunt direct aplicabile în roluri precum: \
         Backend Developer (design API-uri eficiente), Systems Programmer (comunicare \
         inter-proces), Embedded Developer (protocoale pentru microcontrolere), Game Developer \
         (networking multiplayer), IoT Engineer (protocoale senzori).",
    ));
}

fn section_project(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("9. Contribuția la proiectul de echipă"));

    doc.add_paragraph(h2("9.1 Artefact S4: Protocol custom pentru aplicație"));
    doc.add_paragraph(pb("Cerințe minime:"));
    for text in [
        "Specificație documentată: format header, tipuri mesaje, diagrame",
        "Implementare server și client funcționale",
        "Minim 3 tipuri de mesaje/comenzi diferite",
        "Validare integritate (CRC sau alt mecanism)",
        "Captură tshark demonstrativă cu interpretare",
    ] {
        doc.add_paragraph(item("numbered-list-ex", text));
    }
    doc.add_paragraph(pb("Criterii bonus:"));
    for text in [
        "Protocol hibrid (negociere TEXT → transfer BINAR)",
        "Compresie payload opțională",
        "Suport pentru multiple versiuni protocol",
        "Teste automate pentru protocol",
    ] {
        doc.add_paragraph(bullet(text));
    }

    doc.add_paragraph(h2("9.2 Integrare în arhitectura proiectului"));
    doc.add_paragraph(p(
        "Protocolul dezvoltat trebuie să se integreze în arhitectura generală a aplicației de \
         echipă. Documentați în README cum se poziționează protocolul: ce componente îl \
         folosesc, ce date transportă, și de ce ați ales această abordare (TEXT vs BINAR).",
    ));
}

fn section_bibliography(doc: &mut Document) {
    doc.add_page_break();
    doc.add_paragraph(h1("10. Bibliografie și resurse"));

    doc.add_paragraph(h2("10.1 Bibliografie academică cu DOI"));
    doc.add_table(grid(
        vec![5000, 4360],
        &["Referință", "DOI / Link"],
        &[
            &[
                "Kurose, J. & Ross, K. (2021). Computer Networking: A Top-Down Approach (8th \
                 ed.). Pearson.",
                "ISBN: 978-0135928615",
            ],
            &[
                "Stevens, W.R. (1993). TCP/IP Illustrated, Vol. 1: The Protocols. \
                 Addison-Wesley.",
                "ISBN: 978-0201633467",
            ],
            &[
                "Rhodes, B. & Goerzen, J. (2014). Foundations of Python Network Programming \
                 (3rd ed.). Apress.",
                "DOI: 10.1007/978-1-4302-5855-1",
            ],
            &[
                "Postel, J. (1981). Transmission Control Protocol. RFC 793.",
                "DOI: 10.17487/RFC0793",
            ],
            &[
                "Postel, J. (1980). User Datagram Protocol. RFC 768.",
                "DOI: 10.17487/RFC0768",
            ],
        ],
    ));

    doc.add_paragraph(h2("10.2 Standarde și specificații (fără DOI)").space_before(300));
    for text in [
        "Python struct module documentation: https://docs.python.org/3/library/struct.html",
        "Python zlib module documentation: https://docs.python.org/3/library/zlib.html",
        "Wireshark User's Guide: https://www.wireshark.org/docs/wsug_html/",
        "Mininet Documentation: http://mininet.org/walkthrough/",
        "Redis Protocol Specification (RESP): https://redis.io/docs/reference/protocol-spec/",
    ] {
        doc.add_paragraph(bullet(text));
    }

    doc.add_paragraph(
        Paragraph::new()
            .align(Alignment::Center)
            .space_before(600)
            .run(
                Run::text("─── Revolvix&Hypotheticalandrei ───")
                    .size(20)
                    .italic()
                    .color("999999"),
            ),
    );
}
