//! Static schema context for the Formula 1 dataset.
//!
//! Everything here is hand-written reference data baked into the binary:
//! table descriptions, domain conventions, and a curated catalog of example
//! question/query pairs. It is rendered into the SQL-synthesis prompt on
//! every turn and never regenerated per call.

pub struct TableDesc {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct ExamplePair {
    pub question: &'static str,
    pub sql: &'static str,
}

/// Text sentinel used in position columns to mean "did not finish".
/// The store uses this literal string, never NULL or an empty value.
pub const DNF_SENTINEL: &str = r"\N";

pub const TABLES: &[TableDesc] = &[
    TableDesc {
        name: "circuits",
        description: "Circuits are tracks on which Formula 1 races take place. Columns: circuitID, circuitRef (reference name for the circuit), name, location (city in which the circuit is located), country, lat (latitude), long (longitude), alt (altitude) and url (Wikipedia link for the circuit).",
    },
    TableDesc {
        name: "constructor_results",
        description: "Constructor is another name to refer to teams competing in Formula 1. Columns: constructorResultsID, raceID, constructorID, points and status.",
    },
    TableDesc {
        name: "constructor_standings",
        description: "This table gives information about where in the points table each constructor was placed after every race. Columns: constructorStandingsID, raceID, constructorID, points, position (position of the constructor after that particular race in the standings), positionText, wins.",
    },
    TableDesc {
        name: "constructors",
        description: "Columns: constructorID, constructorRef (reference name for each constructor), name, nationality and url (Wikipedia link for the constructor).",
    },
    TableDesc {
        name: "driver_standings",
        description: "This table gives information about where in the points table each driver was placed after every race. Columns: driverStandingsID, raceID, driverID, points, position, positionText and wins.",
    },
    TableDesc {
        name: "drivers",
        description: "This table gives details of every driver who has raced in Formula 1. Columns: driverID, driverRef (reference name for a driver), number (car number), code (3 letter code for each driver), forename, surname, dob (date of birth), nationality, url (Wikipedia page of the driver for more information).",
    },
    TableDesc {
        name: "lap_times",
        description: "This table gives information about the time taken to complete a particular lap in a particular race by a particular driver. Columns: raceID, driverID, lap (lap number in the race), position (position of the driver in the race), time (time taken for the lap), milliseconds (time in milliseconds).",
    },
    TableDesc {
        name: "pit_stops",
        description: "A driver stops during the race in the pitlane to make minor changes to the car. This table gives information about pitstops made during a particular race. Columns: raceID, driverID, stop (pit stop number in the race by that driver), lap (lap in which stop was made), time (time of the day at which stop was made), duration (time taken during the stop), milliseconds (duration in milliseconds).",
    },
    TableDesc {
        name: "qualifying",
        description: "This table contains information about qualification that happens before a race. Columns: qualifyID, raceID, driverID, constructorID, number (car number), q1 (lap time in qualification round 1 also referred to as Q1), q2 (lap time in q2), q3 (lap time in q3).",
    },
    TableDesc {
        name: "races",
        description: "This table contains information about each race held each season. Columns: raceID, year (year in which the race took place), round (nth race of the year, n being a number), circuitID, name, date, time (time of race start), fp1_date (fp stands for free practice), fp1_time, fp2_date, fp2_time, quali_date, quali_time, sprint_date (date of sprint race), sprint_time.",
    },
    TableDesc {
        name: "results",
        description: "This table contains results of each race for each driver. Columns: resultID, raceID, driverID, constructorID, number (car number), grid (position at the start of the race), position (at the end of the race), points, laps (number of laps completed), time (time taken to finish the race. if this begins with + then the value is race leader's time + value given), milliseconds (total time taken in milliseconds), fastestLap (lap number of fastest lap), rank (rank of fastest lap), fastestLapTime, fastestLapSpeed (top speed of fastest lap), statusID (status of driver).",
    },
    TableDesc {
        name: "seasons",
        description: "This table contains the year and a url link of the Wikipedia page corresponding to that season for more information.",
    },
    TableDesc {
        name: "sprint_results",
        description: "This table contains information about results of sprint races during the race week. Columns: resultID, raceID, driverID, constructorID, number (car number), grid (position at the start of the race), position (at the end of the race), points, laps (number of laps completed), time (time taken to finish the race. if this begins with + then the value is race leader's time + value given), milliseconds (total time taken in milliseconds), fastestLap (lap number of fastest lap), fastestLapTime, statusID (status of driver).",
    },
    TableDesc {
        name: "status",
        description: "This table contains the mapping for a description for each statusID. It describes the status of a driver for a particular race. Columns: statusID, status.",
    },
];

pub const INTERCONNECTIONS: &str = "Columns like driverID, constructorID, circuitID, raceID, and statusID are used to interconnect the tables.";

pub const STATUS_TYPES: &str = "Finished, Disqualified, Accident, Collision, Engine, Gearbox, Transmission, Clutch, Hydraulics, Electrical, +1 Lap, +2 Laps, +3 Laps, +4 Laps, +5 Laps, +6 Laps, +7 Laps, +8 Laps, +9 Laps, Spun off, Radiator, Suspension, Brakes, Differential, Overheating, Mechanical, Tyre, Driver Seat, Puncture, Driveshaft, Retired, Fuel pressure, Front wing, Water pressure, Refuelling, Wheel, Throttle, Steering, Technical, Electronics, Broken wing, Heat shield fire, Exhaust, Oil leak, +11 Laps, Wheel rim, Water leak, Fuel pump, Track rod, +17 Laps, Oil pressure, +42 Laps, +13 Laps, Withdrew, +12 Laps, Engine fire, Engine misfire, +26 Laps, Tyre puncture, Out of fuel, Wheel nut, Not classified, Pneumatics, Handling, Rear wing, Fire, Wheel bearing, Physical, Fuel system, Oil line, Fuel rig, Launch control, Injured, Fuel, Power loss, Vibrations, 107% Rule, Safety, Drivetrain, Ignition, Did not qualify, Injury, Chassis, Battery, Stalled, Halfshaft, Crankshaft, +10 Laps, Safety concerns, Not restarted, Alternator, Underweight, Safety belt, Oil pump, Fuel leak, Excluded, Did not prequalify, Injection, Distributor, Driver unwell, Turbo, CV joint, Water pump, Fatal accident, Spark plugs, Fuel pipe, Eye injury, Oil pipe, Axle, Water pipe, +14 Laps, +15 Laps, +25 Laps, +18 Laps, +22 Laps, +16 Laps, +24 Laps, +29 Laps, +23 Laps, +21 Laps, Magneto, +44 Laps, +30 Laps, +19 Laps, +46 Laps, Supercharger, +20 Laps, Collision damage, Power Unit, ERS, +49 Laps, +38 Laps, Brake duct, Seat, Damage, Debris, Illness, Undertray, Cooling system";

/// Domain conventions fed verbatim to the query synthesizer. The DNF
/// sentinel rule matters most: a missing finishing position is the text
/// '\N' in the results table, never NULL.
pub const CONVENTIONS: &str = r#"- Write only the SQL query and nothing else. Don't wrap the text in anything, not even backticks.
- Pay attention to use date('now') function to get the current date when required
- Ensure SQL queries are concise and efficient, select unique whenever required
- Ensure you query for only existing columns
- Properly handle joins between tables to ensure accurate data retrieval. Join on the required IDs whenever asking for a number of occurences of a particular event.
- When using COUNT() with table joins, make sure to use COUNT(DISTINCT column_name)
- The driver that get position 1 in the race is the winner and so on.
- If the year or date is involved while getting the response, join with the races table and use the year or date column. RESULTS TABLE DOESNT HAVE YEAR DETAILS
- A driver/constructor wins the championship if they have the most points in the standings at the end of the year
- Pole position refers to qualifying first, or starting the race first on the grid
- If a driver has finished the race in the top 3 then they are on the podium
- Did not Finish of DNF refers to position='\N' in the results table. DO NOT USE THE WORD 'NULL' or NULL
- For a crash include all these status types - Accident, Collision, Spun off, Collision damage, Fatal accident
- For points scored in a season, use the points column for the last race of the season in the driver's/constructors standings"#;

pub const EXAMPLES: &[ExamplePair] = &[
    ExamplePair {
        question: "How many times has Lewis won the championship?",
        sql: "SELECT COUNT(*) AS championship_wins FROM (SELECT ds.driverID, r.year FROM driver_standings ds JOIN races r ON ds.raceID = r.raceID JOIN drivers d ON ds.driverID = d.driverID WHERE d.forename = 'Lewis' AND d.surname = 'Hamilton' AND ds.position = 1 AND r.round = (SELECT MAX(ra.round) FROM races ra WHERE ra.year = r.year) GROUP BY r.year) AS final_standings;",
    },
    ExamplePair {
        question: "What was the position of Mercedes in the 2020 British Grand Prix?",
        sql: "SELECT cs.position FROM constructor_standings cs JOIN constructors c ON cs.constructorID = c.constructorID JOIN races r ON cs.raceID = r.raceID WHERE r.year = 2020 AND r.name = 'British Grand Prix' AND c.name = 'Mercedes';",
    },
    ExamplePair {
        question: "Which constructor had the most wins in the 2020 season?",
        sql: "SELECT c.name, COUNT(DISTINCT res.resultID) AS wins FROM results res JOIN constructors c ON res.constructorID = c.constructorID JOIN races r ON res.raceID = r.raceID WHERE r.year = 2020 AND res.positionOrder = 1 GROUP BY c.name ORDER BY wins DESC LIMIT 1;",
    },
    ExamplePair {
        question: "Which teams did Lewis Hamilton race for?",
        sql: "SELECT DISTINCT c.name FROM results r JOIN drivers d ON r.driverID = d.driverID JOIN constructors c ON r.constructorID = c.constructorID WHERE d.forename = 'Lewis' AND d.surname = 'Hamilton';",
    },
    ExamplePair {
        question: "Which drivers have got pole positions for Ferrari?",
        sql: "SELECT DISTINCT d.forename, d.surname FROM qualifying q JOIN constructors c ON q.constructorID = c.constructorID JOIN drivers d ON q.driverID = d.driverID WHERE c.name = 'Ferrari' AND q.position = 1;",
    },
    ExamplePair {
        question: "Which drivers qualified on pole and finished first in the race in 2008?",
        sql: "SELECT DISTINCT d.forename, d.surname FROM qualifying q JOIN results r ON q.raceID = r.raceID AND q.driverID = r.driverID JOIN drivers d ON q.driverID = d.driverID WHERE r.grid = 1 AND r.position = 1 AND q.raceID IN (SELECT raceID FROM races WHERE year = 2008);",
    },
    ExamplePair {
        question: "Which driver took the maximum number of races to get their first win?",
        sql: "WITH FirstWin AS (SELECT driverID, MIN(ra.date) AS first_win_date FROM results r JOIN races ra ON r.raceID = ra.raceID WHERE r.position = 1 GROUP BY driverID), RacesBeforeFirstWin AS (SELECT d.driverID, d.forename, d.surname, COUNT(DISTINCT ra.raceID) AS races_before_win FROM results r JOIN drivers d ON r.driverID = d.driverID JOIN races ra ON r.raceID = ra.raceID JOIN FirstWin fw ON r.driverID = fw.driverID WHERE ra.date < fw.first_win_date GROUP BY d.driverID, d.forename, d.surname) SELECT forename, surname, races_before_win FROM RacesBeforeFirstWin ORDER BY races_before_win DESC LIMIT 1;",
    },
    ExamplePair {
        question: "How many pole positions does Lewis have?",
        sql: "SELECT COUNT(DISTINCT r.raceID) AS pole_positions FROM results res JOIN drivers d ON res.driverID = d.driverID JOIN races r ON res.raceID = r.raceID WHERE d.forename = 'Lewis' AND d.surname = 'Hamilton' AND res.grid = 1;",
    },
    ExamplePair {
        question: "How many podiums has Michael Schumacher got?",
        sql: "SELECT COUNT(DISTINCT r.raceID) AS podiums FROM results r JOIN drivers d ON r.driverID = d.driverID WHERE d.forename = 'Michael' AND d.surname = 'Schumacher' AND r.position IN (1,2,3);",
    },
    ExamplePair {
        question: "Which driver has won the most number of races in any single season?",
        sql: "SELECT d.forename, d.surname, r.year, COUNT(DISTINCT res.resultID) AS wins FROM results res JOIN drivers d ON res.driverID = d.driverID JOIN races r ON res.raceID = r.raceID WHERE res.positionOrder = 1 GROUP BY d.forename, d.surname, r.year ORDER BY wins DESC LIMIT 1;",
    },
    ExamplePair {
        question: "In which circuits has Lewis Hamilton never won a race?",
        sql: "SELECT DISTINCT(c.name) AS circuit_name FROM circuits c LEFT JOIN (SELECT DISTINCT r.circuitID FROM results res JOIN races r ON res.raceID = r.raceID JOIN drivers d ON res.driverID = d.driverID WHERE d.forename = 'Lewis' AND d.surname = 'Hamilton' AND res.positionOrder = 1) AS lh_wins ON c.circuitID = lh_wins.circuitID WHERE lh_wins.circuitID IS NULL;",
    },
    ExamplePair {
        question: "Which driver has participated in the most races without having won a race?",
        sql: "SELECT d.forename, d.surname, COUNT(DISTINCT res.raceID) AS race_count FROM drivers d JOIN results res ON d.driverID = res.driverID LEFT JOIN (SELECT DISTINCT driverID FROM results WHERE positionOrder = 1) AS winners ON d.driverID = winners.driverID WHERE winners.driverID IS NULL GROUP BY d.forename, d.surname ORDER BY race_count DESC LIMIT 1;",
    },
    ExamplePair {
        question: "How many races did Max Verstappen not finish?",
        sql: r"SELECT COUNT(DISTINCT raceID) AS races_not_finished FROM results WHERE driverID = (SELECT driverID FROM drivers WHERE forename = 'Max' AND surname = 'Verstappen') AND position='\N';",
    },
    ExamplePair {
        question: "How many races did it take Lewis to get his first win?",
        sql: "WITH FirstWin AS (SELECT driverID, MIN(ra.date) AS first_win_date FROM results JOIN races AS ra ON results.raceID = ra.raceID WHERE results.position = 1 GROUP BY driverID), RacesBeforeFirstWin AS (SELECT d.driverID, d.forename, d.surname, COUNT(DISTINCT ra.raceID) AS races_before_win FROM results JOIN drivers AS d ON results.driverID = d.driverID JOIN races AS ra ON results.raceID = ra.raceID JOIN FirstWin AS fw ON results.driverID = fw.driverID WHERE ra.date < fw.first_win_date GROUP BY d.driverID, d.forename, d.surname) SELECT forename, surname, races_before_win FROM RacesBeforeFirstWin WHERE driverID = (SELECT driverID FROM drivers WHERE forename = 'Lewis' AND surname = 'Hamilton');",
    },
    ExamplePair {
        question: "How many points did Lando Norris score in 2023?",
        sql: "SELECT DISTINCT(ds.points) AS total_points FROM driver_standings ds JOIN drivers d ON ds.driverID = d.driverID JOIN races r ON ds.raceID = r.raceID WHERE d.forename = 'Lando' AND d.surname = 'Norris' AND r.year = 2023 AND r.date = (SELECT MAX(date) FROM races WHERE year = 2023);",
    },
];

/// Table catalog rendered as prompt text.
pub fn render_tables() -> String {
    let mut out = String::new();
    for t in TABLES {
        out.push_str("- ");
        out.push_str(t.name);
        out.push_str(" - ");
        out.push_str(t.description);
        out.push('\n');
    }
    out
}

/// Example catalog rendered as Human/AI pairs for few-shot prompting.
pub fn render_examples() -> String {
    let mut out = String::new();
    for ex in EXAMPLES {
        out.push_str("Human: ");
        out.push_str(ex.question);
        out.push('\n');
        out.push_str("AI: ");
        out.push_str(ex.sql);
        out.push('\n');
    }
    out
}
