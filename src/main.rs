use clap::Parser;
use mindcare::application::browse::BrowseQuery;
use mindcare::cli::commands::{Cli, Commands};
use mindcare::domain::values::note_kind::NoteKind;
use mindcare::MindCare;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let db_path = std::env::var("MINDCARE_DB").unwrap_or_else(|_| "./mindcare.db".into());

    let mc = match MindCare::new(&db_path) {
        Ok(mc) => mc,
        Err(e) => {
            eprintln!("Error initializing MindCare: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(mc, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(mc: MindCare, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::StudentAdd { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;
            let name = data["name"]
                .as_str()
                .ok_or("Missing required field: name")?
                .to_string();
            let guardian_name = data["guardian_name"].as_str().map(String::from);
            let phone = data["phone"].as_str().map(String::from);
            let circle = data["circle"].as_str().map(String::from);

            let student = mc.register_student(name, guardian_name, phone, circle)?;
            println!("{}", serde_json::to_string_pretty(&student)?);
        }
        Commands::StudentUpdate { id, json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;
            let student = mc.update_student(
                id,
                data["name"].as_str().map(String::from),
                data["guardian_name"].as_str().map(String::from),
                data["phone"].as_str().map(String::from),
                data["circle"].as_str().map(String::from),
            )?;
            println!("{}", serde_json::to_string_pretty(&student)?);
        }
        Commands::StudentRemove { id } => {
            mc.remove_student(id)?;
            println!("Student {id} removed");
        }
        Commands::Students {
            search,
            page,
            page_size,
            from,
            to,
        } => {
            let query = browse_query(search, page, page_size, &from, &to)?;
            let result = mc.students(&query)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::CaseOpen { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;
            let student_id = data["student_id"]
                .as_i64()
                .ok_or("Missing required field: student_id")?;
            let title = data["title"]
                .as_str()
                .ok_or("Missing required field: title")?
                .to_string();
            let diagnosis = data["diagnosis"].as_str().map(String::from);

            let case = mc.open_case(student_id, title, diagnosis)?;
            println!("{}", serde_json::to_string_pretty(&case)?);
        }
        Commands::CaseResolve { id } => {
            mc.resolve_case(id)?;
            println!("Case {id} resolved");
        }
        Commands::Cases {
            search,
            page,
            page_size,
            from,
            to,
        } => {
            let query = browse_query(search, page, page_size, &from, &to)?;
            let result = mc.cases(&query)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::GeneralOpen { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;
            let person_name = data["person_name"]
                .as_str()
                .ok_or("Missing required field: person_name")?
                .to_string();
            let description = data["description"]
                .as_str()
                .ok_or("Missing required field: description")?
                .to_string();

            let case = mc.open_general_case(person_name, description)?;
            println!("{}", serde_json::to_string_pretty(&case)?);
        }
        Commands::GeneralResolve { id } => {
            mc.resolve_general_case(id)?;
            println!("General case {id} resolved");
        }
        Commands::Generals {
            search,
            page,
            page_size,
            from,
            to,
        } => {
            let query = browse_query(search, page, page_size, &from, &to)?;
            let result = mc.general_cases(&query)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::NoteAdd {
            case_id,
            kind,
            body,
        } => {
            let kind: NoteKind = kind.parse().map_err(|e: String| e)?;
            let note = mc.add_note(case_id, kind, body)?;
            println!("{}", serde_json::to_string_pretty(&note)?);
        }
        Commands::Notes { case_id } => {
            let notes = mc.case_notes(case_id)?;
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
        Commands::Book { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;
            let student_id = data["student_id"]
                .as_i64()
                .ok_or("Missing required field: student_id")?;
            let scheduled_str = data["scheduled_for"]
                .as_str()
                .ok_or("Missing required field: scheduled_for")?;
            let scheduled_for = parse_datetime(scheduled_str)?;
            let reason = data["reason"]
                .as_str()
                .ok_or("Missing required field: reason")?
                .to_string();

            let appointment = mc.book_appointment(student_id, scheduled_for, reason)?;
            println!("{}", serde_json::to_string_pretty(&appointment)?);
        }
        Commands::Complete { id } => {
            mc.complete_appointment(id)?;
            println!("Appointment {id} completed");
        }
        Commands::Cancel { id } => {
            mc.cancel_appointment(id)?;
            println!("Appointment {id} cancelled");
        }
        Commands::Appointments {
            search,
            page,
            page_size,
            from,
            to,
        } => {
            let query = browse_query(search, page, page_size, &from, &to)?;
            let result = mc.appointments(&query)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Upcoming { limit } => {
            let appointments = mc.upcoming_appointments(limit)?;
            println!("{}", serde_json::to_string_pretty(&appointments)?);
        }
        Commands::TaskAdd { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;
            let title = data["title"]
                .as_str()
                .ok_or("Missing required field: title")?
                .to_string();
            let details = data["details"].as_str().map(String::from);
            let due_date = match data["due_date"].as_str() {
                Some(s) => Some(parse_day(s)?),
                None => None,
            };

            let task = mc.add_task(title, details, due_date)?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        Commands::TaskDone { id } => {
            mc.complete_task(id)?;
            println!("Task {id} done");
        }
        Commands::TaskRemove { id } => {
            mc.remove_task(id)?;
            println!("Task {id} removed");
        }
        Commands::Tasks {
            search,
            page,
            page_size,
            from,
            to,
        } => {
            let query = browse_query(search, page, page_size, &from, &to)?;
            let result = mc.tasks(&query)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Dashboard => {
            let summary = mc.dashboard();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Report { year } => {
            let report = mc.monthly_report(year);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn browse_query(
    search: Option<String>,
    page: u64,
    page_size: u64,
    from: &Option<String>,
    to: &Option<String>,
) -> Result<BrowseQuery, String> {
    let start_date = match from {
        Some(s) => Some(parse_day(s)?),
        None => None,
    };
    let end_date = match to {
        Some(s) => Some(parse_day(s)?),
        None => None,
    };
    Ok(BrowseQuery {
        search,
        page: Some(page),
        page_size: Some(page_size),
        start_date,
        end_date,
    })
}

fn parse_day(s: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format: {s}. Use YYYY-MM-DD"))
}

fn parse_datetime(s: &str) -> Result<chrono::DateTime<chrono::Utc>, String> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&chrono::Utc));
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(chrono::DateTime::from_naive_utc_and_offset(dt, chrono::Utc));
        }
    }
    Err(format!("Invalid date format: {s}. Use YYYY-MM-DD or RFC3339"))
}
