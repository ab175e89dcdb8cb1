//! Mock records the store starts with when nothing has been persisted yet.

use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use rand::Rng;

use crate::database::models::*;
use crate::database::stores::data::{DataStore, generate_id};

const ATTENDANCE_HISTORY_DAYS: u64 = 90;

/// Amount in paise (hundredths of a rupee).
fn money(paise: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(paise), 2)
}

fn rupees(amount: i64) -> BigDecimal {
    BigDecimal::from(amount)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn avatar(photo: &str) -> Option<String> {
    Some(format!(
        "https://images.unsplash.com/{}?w=150&h=150&fit=crop&crop=face",
        photo
    ))
}

pub fn sample_users() -> Vec<User> {
    let user = |id: &str,
                email: &str,
                full_name: &str,
                role: UserRole,
                status: UserStatus,
                photo: &str,
                created: NaiveDate| User {
        id: id.to_string(),
        employee_id: format!("EMP00{}", id),
        email: email.to_string(),
        full_name: full_name.to_string(),
        role,
        status,
        profile_picture: avatar(photo),
        created_at: timestamp(created.year(), created.month(), created.day(), 0, 0),
    };

    vec![
        user(
            "1",
            "rahul.sharma@dayflow.com",
            "Rahul Sharma",
            UserRole::Employee,
            UserStatus::Active,
            "photo-1506794778202-cad84cf45f1d",
            date(2023, 1, 15),
        ),
        user(
            "2",
            "priya.hr@dayflow.com",
            "Priya Patel",
            UserRole::Hr,
            UserStatus::Active,
            "photo-1573496359142-b8d87734a5a2",
            date(2022, 6, 1),
        ),
        user(
            "3",
            "amit.admin@dayflow.com",
            "Amit Verma",
            UserRole::Admin,
            UserStatus::Active,
            "photo-1472099645785-5658abf4ff4e",
            date(2021, 3, 20),
        ),
        user(
            "4",
            "sneha.gupta@dayflow.com",
            "Sneha Gupta",
            UserRole::Employee,
            UserStatus::Active,
            "photo-1580489944761-15a19d654956",
            date(2023, 3, 10),
        ),
        user(
            "5",
            "vikram.singh@dayflow.com",
            "Vikram Singh",
            UserRole::Employee,
            UserStatus::Active,
            "photo-1507003211169-0a1dd7228f2d",
            date(2023, 5, 22),
        ),
        user(
            "6",
            "ananya.reddy@dayflow.com",
            "Ananya Reddy",
            UserRole::Employee,
            UserStatus::Active,
            "photo-1534528741775-53994a69daeb",
            date(2023, 7, 15),
        ),
        user(
            "7",
            "rajesh.kumar@dayflow.com",
            "Rajesh Kumar",
            UserRole::Employee,
            UserStatus::Active,
            "photo-1500648767791-00dcc994a43e",
            date(2022, 11, 8),
        ),
        user(
            "8",
            "meera.joshi@dayflow.com",
            "Meera Joshi",
            UserRole::Employee,
            UserStatus::OnLeave,
            "photo-1544005313-94ddf0286df2",
            date(2023, 2, 28),
        ),
        user(
            "9",
            "arjun.nair@dayflow.com",
            "Arjun Nair",
            UserRole::Employee,
            UserStatus::Inactive,
            "photo-1519085360753-af0119f7cbe7",
            date(2022, 9, 12),
        ),
    ]
}

pub fn sample_profiles() -> BTreeMap<String, Profile> {
    let profiles = vec![
        Profile {
            user_id: "1".to_string(),
            date_of_birth: date(1992, 8, 15),
            gender: Gender::Male,
            blood_group: "B+".to_string(),
            marital_status: MaritalStatus::Married,
            nationality: Some("Indian".to_string()),
            phone: "+91 98765 43210".to_string(),
            personal_email: "rahul.personal@email.com".to_string(),
            current_address: "42, Koramangala 5th Block, Bangalore, Karnataka 560095".to_string(),
            permanent_address: "156, MG Road, Lucknow, Uttar Pradesh 226001".to_string(),
            emergency_contact: EmergencyContact {
                name: "Neha Sharma".to_string(),
                relationship: "Spouse".to_string(),
                phone: "+91 98765 43211".to_string(),
            },
            bank_details: Some(BankDetails {
                account_number: "XXXX XXXX 1234".to_string(),
                bank_name: "HDFC Bank".to_string(),
                ifsc_code: "HDFC0001234".to_string(),
            }),
            pan_number: Some("ABCDE1234F".to_string()),
            uan_number: Some("100123456789".to_string()),
            emp_code: Some("EMP001".to_string()),
            about: Some(
                "Passionate software engineer with 5+ years of experience in building scalable web applications."
                    .to_string(),
            ),
            what_i_love_about_job: Some(
                "The collaborative environment and the opportunity to work on cutting-edge technologies."
                    .to_string(),
            ),
            interests_and_hobbies: Some(
                "Reading tech blogs, playing cricket on weekends, photography.".to_string(),
            ),
            skills: ["JavaScript", "TypeScript", "React", "Node.js", "Python", "AWS"]
                .map(String::from)
                .to_vec(),
            certifications: ["AWS Solutions Architect", "Google Cloud Professional"]
                .map(String::from)
                .to_vec(),
        },
        Profile {
            user_id: "2".to_string(),
            date_of_birth: date(1990, 3, 22),
            gender: Gender::Female,
            blood_group: "A+".to_string(),
            marital_status: MaritalStatus::Single,
            nationality: Some("Indian".to_string()),
            phone: "+91 87654 32109".to_string(),
            personal_email: "priya.personal@email.com".to_string(),
            current_address: "78, Indiranagar, Bangalore, Karnataka 560038".to_string(),
            permanent_address: "234, Satellite Road, Ahmedabad, Gujarat 380015".to_string(),
            emergency_contact: EmergencyContact {
                name: "Suresh Patel".to_string(),
                relationship: "Father".to_string(),
                phone: "+91 87654 32108".to_string(),
            },
            bank_details: Some(BankDetails {
                account_number: "XXXX XXXX 5678".to_string(),
                bank_name: "ICICI Bank".to_string(),
                ifsc_code: "ICIC0005678".to_string(),
            }),
            pan_number: Some("FGHIJ5678K".to_string()),
            uan_number: Some("100234567890".to_string()),
            emp_code: Some("EMP002".to_string()),
            about: Some(
                "HR professional with expertise in talent acquisition and employee engagement."
                    .to_string(),
            ),
            what_i_love_about_job: Some(
                "Helping employees grow and creating a positive work culture.".to_string(),
            ),
            interests_and_hobbies: Some("Yoga, reading business books, traveling.".to_string()),
            skills: [
                "HR Management",
                "Talent Acquisition",
                "Employee Relations",
                "HRIS Systems",
            ]
            .map(String::from)
            .to_vec(),
            certifications: ["SHRM-CP", "PHR Certified"].map(String::from).to_vec(),
        },
        Profile {
            user_id: "4".to_string(),
            date_of_birth: date(1995, 11, 30),
            gender: Gender::Female,
            blood_group: "O+".to_string(),
            marital_status: MaritalStatus::Single,
            nationality: Some("Indian".to_string()),
            phone: "+91 76543 21098".to_string(),
            personal_email: "sneha.personal@email.com".to_string(),
            current_address: "15, HSR Layout, Bangalore, Karnataka 560102".to_string(),
            permanent_address: "89, Civil Lines, Delhi 110054".to_string(),
            emergency_contact: EmergencyContact {
                name: "Rakesh Gupta".to_string(),
                relationship: "Father".to_string(),
                phone: "+91 76543 21097".to_string(),
            },
            bank_details: Some(BankDetails {
                account_number: "XXXX XXXX 9012".to_string(),
                bank_name: "Axis Bank".to_string(),
                ifsc_code: "UTIB0009012".to_string(),
            }),
            pan_number: Some("KLMNO9012P".to_string()),
            uan_number: Some("100345678901".to_string()),
            emp_code: Some("EMP004".to_string()),
            about: Some(
                "Creative UI/UX designer passionate about intuitive user experiences.".to_string(),
            ),
            what_i_love_about_job: Some(
                "The freedom to be creative and the impact designs have on users.".to_string(),
            ),
            interests_and_hobbies: Some("Digital art, photography, design meetups.".to_string()),
            skills: [
                "Figma",
                "Adobe XD",
                "Sketch",
                "UI Design",
                "User Research",
                "Prototyping",
            ]
            .map(String::from)
            .to_vec(),
            certifications: [
                "Google UX Design Certificate",
                "Interaction Design Foundation",
            ]
            .map(String::from)
            .to_vec(),
        },
    ];

    profiles
        .into_iter()
        .map(|p| (p.user_id.clone(), p))
        .collect()
}

pub fn sample_job_details() -> BTreeMap<String, JobDetails> {
    let job = |user_id: &str,
               department: &str,
               position: &str,
               joined: NaiveDate,
               manager: &str,
               location: &str,
               shift: &str| JobDetails {
        user_id: user_id.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        date_of_joining: joined,
        employment_type: EmploymentType::FullTime,
        reporting_manager: manager.to_string(),
        work_location: location.to_string(),
        shift_timings: shift.to_string(),
        company: None,
    };

    [
        job("1", "Engineering", "Senior Software Engineer", date(2023, 1, 15), "Priya Patel", "Bangalore Office", "9:00 AM - 6:00 PM"),
        job("2", "Human Resources", "HR Manager", date(2022, 6, 1), "Amit Verma", "Bangalore Office", "9:00 AM - 6:00 PM"),
        job("4", "Design", "UI/UX Designer", date(2023, 3, 10), "Priya Patel", "Bangalore Office", "10:00 AM - 7:00 PM"),
        job("5", "Engineering", "Backend Developer", date(2023, 5, 22), "Rahul Sharma", "Mumbai Office", "9:00 AM - 6:00 PM"),
        job("6", "Marketing", "Marketing Executive", date(2023, 7, 15), "Priya Patel", "Bangalore Office", "9:30 AM - 6:30 PM"),
        job("7", "Engineering", "DevOps Engineer", date(2022, 11, 8), "Amit Verma", "Bangalore Office", "9:00 AM - 6:00 PM"),
        job("8", "Finance", "Accounts Manager", date(2023, 2, 28), "Amit Verma", "Delhi Office", "9:00 AM - 6:00 PM"),
        job("9", "Sales", "Sales Executive", date(2022, 9, 12), "Priya Patel", "Chennai Office", "10:00 AM - 7:00 PM"),
    ]
    .into_iter()
    .map(|j| (j.user_id.clone(), j))
    .collect()
}

pub fn sample_salary_structures() -> BTreeMap<String, SalaryStructure> {
    let structures = vec![
        SalaryStructure {
            user_id: "1".to_string(),
            monthly_wage: rupees(50_000),
            yearly_wage: rupees(600_000),
            working_days_per_week: Some(5),
            break_time_hours: Some(1.0),
            basic_salary: rupees(25_000),
            basic_percent: 50.0,
            allowances: Allowances {
                hra: rupees(12_500),
                hra_percent: 50.0,
                da: rupees(0),
                da_percent: Some(0.0),
                standard_allowance: rupees(4_167),
                standard_percent: 16.67,
                performance_bonus: money(209_250),
                performance_percent: 8.33,
                leave_travel_allowance: money(208_250),
                lta_percent: 8.33,
                fixed_allowance: rupees(2_918),
                fixed_percent: 11.67,
                transport: rupees(3_000),
                special: rupees(12_000),
            },
            deductions: Deductions {
                pf: rupees(3_000),
                pf_percent: 12.0,
                employer_pf: rupees(3_000),
                employer_pf_percent: 12.0,
                tax: rupees(15_000),
                professional_tax: rupees(200),
            },
            gross_salary: rupees(135_000),
            net_salary: rupees(110_200),
            bank_account: "XXXX XXXX 1234".to_string(),
            effective_from: date(2023, 1, 1),
        },
        SalaryStructure {
            user_id: "4".to_string(),
            monthly_wage: rupees(40_000),
            yearly_wage: rupees(480_000),
            working_days_per_week: Some(5),
            break_time_hours: Some(1.0),
            basic_salary: rupees(20_000),
            basic_percent: 50.0,
            allowances: Allowances {
                hra: rupees(10_000),
                hra_percent: 50.0,
                da: rupees(0),
                da_percent: Some(0.0),
                standard_allowance: rupees(3_334),
                standard_percent: 16.67,
                performance_bonus: rupees(1_666),
                performance_percent: 8.33,
                leave_travel_allowance: rupees(1_666),
                lta_percent: 8.33,
                fixed_allowance: rupees(2_334),
                fixed_percent: 11.67,
                transport: rupees(2_500),
                special: rupees(8_000),
            },
            deductions: Deductions {
                pf: rupees(2_400),
                pf_percent: 12.0,
                employer_pf: rupees(2_400),
                employer_pf_percent: 12.0,
                tax: rupees(10_000),
                professional_tax: rupees(200),
            },
            gross_salary: rupees(100_500),
            net_salary: rupees(83_100),
            bank_account: "XXXX XXXX 5678".to_string(),
            effective_from: date(2023, 3, 10),
        },
    ];

    structures
        .into_iter()
        .map(|s| (s.user_id.clone(), s))
        .collect()
}

pub fn sample_leave_requests() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: "1".to_string(),
            user_id: "1".to_string(),
            employee_name: "Rahul Sharma".to_string(),
            employee_id: "EMP001".to_string(),
            department: "Engineering".to_string(),
            leave_type: LeaveType::Paid,
            from_date: date(2024, 2, 15),
            to_date: date(2024, 2, 17),
            days: 3,
            reason: "Family function in hometown".to_string(),
            status: LeaveStatus::Pending,
            admin_remarks: None,
            applied_at: timestamp(2024, 2, 10, 0, 0),
            updated_at: None,
        },
        LeaveRequest {
            id: "2".to_string(),
            user_id: "1".to_string(),
            employee_name: "Rahul Sharma".to_string(),
            employee_id: "EMP001".to_string(),
            department: "Engineering".to_string(),
            leave_type: LeaveType::Sick,
            from_date: date(2024, 1, 20),
            to_date: date(2024, 1, 21),
            days: 2,
            reason: "Fever and cold".to_string(),
            status: LeaveStatus::Approved,
            admin_remarks: Some("Take care!".to_string()),
            applied_at: timestamp(2024, 1, 19, 0, 0),
            updated_at: Some(timestamp(2024, 1, 19, 0, 0)),
        },
        LeaveRequest {
            id: "3".to_string(),
            user_id: "8".to_string(),
            employee_name: "Meera Joshi".to_string(),
            employee_id: "EMP008".to_string(),
            department: "Finance".to_string(),
            leave_type: LeaveType::Paid,
            from_date: date(2024, 2, 1),
            to_date: date(2024, 2, 10),
            days: 10,
            reason: "Vacation".to_string(),
            status: LeaveStatus::Approved,
            admin_remarks: None,
            applied_at: timestamp(2024, 1, 25, 0, 0),
            updated_at: Some(timestamp(2024, 1, 26, 0, 0)),
        },
    ]
}

/// Ninety days of history per user ending at `today`: weekends tagged as such,
/// roughly one weekday in ten absent (never for user "1"), the rest a 09:00-18:00 day.
pub fn sample_attendance<R: Rng>(users: &[User], today: NaiveDate, rng: &mut R) -> Vec<Attendance> {
    let check_in = NaiveTime::from_hms_opt(9, 0, 0);
    let check_out = NaiveTime::from_hms_opt(18, 0, 0);
    let mut records = Vec::new();

    for user in users {
        for offset in 0..ATTENDANCE_HISTORY_DAYS {
            let Some(day) = today.checked_sub_days(Days::new(offset)) else {
                break;
            };
            let is_weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
            let is_absent = user.id != "1" && rng.random_bool(0.1);

            let mut record = Attendance {
                id: generate_id(),
                user_id: user.id.clone(),
                date: day,
                check_in_time: None,
                check_out_time: None,
                total_hours: None,
                extra_hours: None,
                status: AttendanceStatus::Present,
            };

            if is_weekend {
                record.status = AttendanceStatus::Weekend;
            } else if is_absent {
                record.status = AttendanceStatus::Absent;
            } else {
                record.check_in_time = check_in;
                record.check_out_time = check_out;
                record.total_hours = Some(9.0);
                record.extra_hours = Some(1.0);
            }

            records.push(record);
        }
    }

    records
}

pub fn sample_leave_balances() -> BTreeMap<String, LeaveBalance> {
    [
        ("1", 12, 8, 5, 3),
        ("4", 15, 10, 7, 3),
        ("5", 14, 9, 6, 3),
        ("6", 12, 8, 5, 3),
        ("7", 10, 7, 4, 2),
        ("8", 5, 6, 3, 2),
        ("9", 8, 5, 4, 2),
    ]
    .into_iter()
    .map(|(user_id, paid, sick, casual, emergency)| {
        (
            user_id.to_string(),
            LeaveBalance {
                paid,
                sick,
                unpaid: 0,
                casual,
                emergency,
            },
        )
    })
    .collect()
}

pub fn sample_payslips() -> Vec<Payslip> {
    let payslip = |id: &str, month: &str, year: i32, paid_on: NaiveDate| Payslip {
        id: id.to_string(),
        user_id: "1".to_string(),
        month: month.to_string(),
        year,
        earnings: PayslipEarnings {
            basic: rupees(80_000),
            hra: rupees(32_000),
            da: rupees(8_000),
            transport: rupees(3_000),
            special: rupees(12_000),
        },
        deductions: PayslipDeductions {
            pf: rupees(9_600),
            tax: rupees(15_000),
            professional_tax: rupees(200),
        },
        gross_salary: rupees(135_000),
        net_salary: rupees(110_200),
        payment_status: PaymentStatus::Paid,
        payment_date: Some(paid_on),
    };

    vec![
        payslip("1", "January", 2024, date(2024, 1, 31)),
        payslip("2", "December", 2023, date(2023, 12, 31)),
    ]
}

pub fn sample_notifications() -> Vec<Notification> {
    let notification = |id: &str,
                        notification_type: NotificationType,
                        title: &str,
                        message: &str,
                        is_read: bool,
                        created_at: DateTime<Utc>| Notification {
        id: id.to_string(),
        user_id: "1".to_string(),
        notification_type,
        title: title.to_string(),
        message: message.to_string(),
        is_read,
        created_at,
    };

    vec![
        notification(
            "1",
            NotificationType::Leave,
            "Leave Request Approved",
            "Your sick leave request for Jan 20-21 has been approved.",
            false,
            timestamp(2024, 1, 19, 10, 30),
        ),
        notification(
            "2",
            NotificationType::Payroll,
            "Salary Credited",
            "Your salary for January 2024 has been credited to your account.",
            true,
            timestamp(2024, 1, 31, 9, 0),
        ),
        notification(
            "3",
            NotificationType::Announcement,
            "Office Holiday",
            "Office will remain closed on January 26th for Republic Day.",
            false,
            timestamp(2024, 1, 20, 8, 0),
        ),
    ]
}

/// Full sample data set with attendance generated backwards from `today`.
pub fn sample_data(today: NaiveDate) -> DataStore {
    let users = sample_users();
    let attendance = sample_attendance(&users, today, &mut rand::rng());

    DataStore {
        profiles: sample_profiles(),
        job_details: sample_job_details(),
        salary_structures: sample_salary_structures(),
        leave_requests: sample_leave_requests(),
        attendance,
        leave_balances: sample_leave_balances(),
        payslips: sample_payslips(),
        notifications: sample_notifications(),
        users,
    }
}
